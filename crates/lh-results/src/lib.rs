//! lh-results: delimited station matrix output and read-back.

pub mod dialect;
pub mod marker;
pub mod reader;
pub mod writer;

pub use marker::UnreachableMarker;
pub use reader::TransferTable;
pub use writer::MatrixWriter;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid delimiter {0:?}")]
    InvalidDelimiter(char),

    #[error("Unreachable marker {marker} collides with a real transfer count")]
    AmbiguousMarker { marker: String },

    #[error("Matrix has {found} stations but the network has {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Malformed table: {message}")]
    Shape { message: String },

    #[error("Invalid cell '{value}' at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },
}
