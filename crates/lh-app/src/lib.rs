//! Shared application service layer for linehop.
//!
//! This crate gives the CLI one place to load settings, run the
//! listing-to-matrix pipeline, and answer single-pair queries.

pub mod config;
pub mod error;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use config::{Settings, load_settings};
pub use error::{AppError, AppResult};
pub use query::{lookup_table, min_transfers};
pub use run_service::{
    ComputeRequest, ComputeResponse, RunSummary, RunTimingSummary, compute, load_network,
};
