//! End-to-end transfer computation over a frozen network.

use lh_network::Network;

use crate::adjacency::{LineDistances, build_line_adjacency};
use crate::closure::{ClosureStrategy, close};
use crate::error::TransferResult;
use crate::projection::{StationDistances, project_stations};

/// Both matrices produced by a full run.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Closed line distances.
    pub lines: LineDistances,
    /// Number of direct line-to-line links before closure.
    pub direct_links: usize,
    pub stations: StationDistances,
}

/// Runs adjacency, closure, and projection in order.
///
/// The phases are also exposed individually so callers can time or inspect
/// each intermediate matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferEngine {
    strategy: ClosureStrategy,
}

impl TransferEngine {
    pub fn new(strategy: ClosureStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ClosureStrategy {
        self.strategy
    }

    pub fn adjacency(&self, network: &Network) -> LineDistances {
        build_line_adjacency(network)
    }

    pub fn close(&self, distances: &mut LineDistances) {
        close(distances, self.strategy);
    }

    pub fn project(
        &self,
        network: &Network,
        closed: &LineDistances,
    ) -> TransferResult<StationDistances> {
        project_stations(network, closed)
    }

    pub fn run(&self, network: &Network) -> TransferResult<TransferOutcome> {
        let mut lines = self.adjacency(network);
        let direct_links = lines.edge_count();
        self.close(&mut lines);
        let stations = self.project(network, &lines)?;
        Ok(TransferOutcome {
            lines,
            direct_links,
            stations,
        })
    }
}
