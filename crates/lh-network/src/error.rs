//! Network-specific error types.

use lh_core::{LhError, LineId, StationId};
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Listing parse and network construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A line record claims more stations than the stream holds.
    /// `position` is the 1-based token index where the next station was due.
    #[error(
        "Line '{line}' declares {expected} stations but only {found} are present (token {position})"
    )]
    MalformedInput {
        position: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    /// The stream ended where a line name or count was required.
    #[error("Unexpected end of listing at token {position}: expected {expected}")]
    Truncated {
        position: usize,
        expected: &'static str,
    },

    /// A count field is not a non-negative integer.
    #[error("Invalid count '{token}' at token {position}")]
    InvalidCount { position: usize, token: String },

    /// A membership refers to a line the builder never issued.
    #[error("Unknown line {0}")]
    UnknownLine(LineId),

    /// A membership refers to a station the builder never issued.
    #[error("Unknown station {0}")]
    UnknownStation(StationId),

    /// Line and station membership lists disagree.
    #[error("Inconsistent membership between line {line} and station {station}")]
    InconsistentMembership { line: LineId, station: StationId },

    #[error(transparent)]
    Core(#[from] LhError),
}
