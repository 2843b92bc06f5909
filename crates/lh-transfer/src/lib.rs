//! lh-transfer: minimum-transfer engine for linehop.
//!
//! The pipeline runs in three phases, each owning the matrix it produces:
//!
//! 1. [`adjacency`]: link every pair of lines that share a station
//! 2. [`closure`]: all-pairs shortest paths over the line graph
//! 3. [`projection`]: reduce line distances to station distances
//!
//! # Example
//!
//! ```
//! use lh_network::parse_listing;
//! use lh_transfer::{ClosureStrategy, TransferEngine};
//!
//! let network = parse_listing("2 Line1 2 S1 S2 Line2 2 S2 S3").unwrap();
//! let outcome = TransferEngine::new(ClosureStrategy::Sequential)
//!     .run(&network)
//!     .unwrap();
//!
//! let s1 = network.station_by_name("S1").unwrap().id;
//! let s3 = network.station_by_name("S3").unwrap().id;
//! assert_eq!(outcome.stations.transfers(s1, s3).count(), Some(1));
//! ```

pub mod adjacency;
pub mod closure;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod projection;

pub use adjacency::{AdjacencyBuilder, LineDistances, build_line_adjacency};
pub use closure::{ClosureStrategy, close, is_closed};
pub use engine::{TransferEngine, TransferOutcome};
pub use error::{TransferError, TransferResult};
pub use matrix::SquareMatrix;
pub use projection::{StationDistances, pair_distance, project_pair, project_stations};
