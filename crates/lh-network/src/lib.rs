//! lh-network: the transit network model for linehop.
//!
//! Provides:
//! - Core data structures (Line, Station, Network)
//! - Incremental network builder that freezes memberships before any
//!   adjacency is derived
//! - A parser for the whitespace-separated line/station listing
//!
//! # Example
//!
//! ```
//! use lh_network::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! let red = builder.add_line("Red").unwrap();
//! builder.serve(red, "Central").unwrap();
//! builder.serve(red, "Harbour").unwrap();
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.lines().len(), 1);
//! assert_eq!(network.stations().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod network;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use loader::parse_listing;
pub use network::{Line, Network, Station};
