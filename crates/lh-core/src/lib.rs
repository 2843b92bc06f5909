//! lh-core: stable foundation for linehop.
//!
//! Contains:
//! - ids (distinct compact IDs for lines and stations)
//! - distance (transfer-count ordinal with an overflow-safe infinity)
//! - error (shared error types)
//! - timing (per-phase wall clock measurement)

pub mod distance;
pub mod error;
pub mod ids;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use distance::{Distance, Transfers};
pub use error::{LhError, LhResult};
pub use ids::*;
pub use timing::Timer;
