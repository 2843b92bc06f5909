//! Error types for the lh-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read settings file: {path}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Failed to read listing: {path}")]
    ListingRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write matrix: {path}")]
    MatrixWrite {
        path: PathBuf,
        source: lh_results::ResultsError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] lh_network::NetworkError),

    #[error("Transfer error: {0}")]
    Transfer(#[from] lh_transfer::TransferError),

    #[error("Results error: {0}")]
    Results(#[from] lh_results::ResultsError),

    #[error("Station not found: {0}")]
    StationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for lh-app operations.
pub type AppResult<T> = Result<T, AppError>;
