//! Error types for transfer computation.

use lh_core::{LineId, StationId};
use thiserror::Error;

/// Errors that can occur while building or reducing distance matrices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Matrix dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Line {0} is outside the distance matrix")]
    LineOutOfRange(LineId),

    #[error("Station {0} is outside the distance matrix")]
    StationOutOfRange(StationId),
}

pub type TransferResult<T> = Result<T, TransferError>;
