//! Line-adjacency construction.
//!
//! Two lines are one transfer apart when they share a station. A station
//! served by `n` lines contributes every one of the `n * (n - 1) / 2`
//! pairs, not just links to the first line seen there.

use std::collections::HashMap;

use lh_core::{Distance, LineId, StationId};
use lh_network::Network;
use tracing::debug;

use crate::error::{TransferError, TransferResult};
use crate::matrix::SquareMatrix;

/// Symmetric line-to-line distance matrix.
///
/// Starts with zero on the diagonal and infinity elsewhere; every mutation
/// writes both `(a, b)` and `(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDistances {
    pub(crate) matrix: SquareMatrix<Distance>,
}

impl LineDistances {
    /// `line_count` lines with no links between them.
    pub fn isolated(line_count: usize) -> Self {
        let mut matrix = SquareMatrix::filled(line_count, Distance::INFINITY);
        for i in 0..line_count {
            matrix.set(i, i, Distance::ZERO);
        }
        Self { matrix }
    }

    pub fn line_count(&self) -> usize {
        self.matrix.size()
    }

    pub fn get(&self, a: LineId, b: LineId) -> Distance {
        self.matrix.get(a.slot(), b.slot())
    }

    /// Link two lines with a direct, single-transfer edge.
    pub fn link(&mut self, a: LineId, b: LineId) -> TransferResult<()> {
        for id in [a, b] {
            if id.slot() >= self.line_count() {
                return Err(TransferError::LineOutOfRange(id));
            }
        }
        if a != b {
            self.matrix.set(a.slot(), b.slot(), Distance::ONE);
            self.matrix.set(b.slot(), a.slot(), Distance::ONE);
        }
        Ok(())
    }

    /// Number of unordered line pairs at distance exactly one.
    pub fn edge_count(&self) -> usize {
        let n = self.line_count();
        (0..n)
            .map(|i| {
                (i + 1..n)
                    .filter(|&j| self.matrix.get(i, j) == Distance::ONE)
                    .count()
            })
            .sum()
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }

    pub fn matrix(&self) -> &SquareMatrix<Distance> {
        &self.matrix
    }
}

/// Streaming adjacency builder fed with (station, line) membership events.
///
/// Each event links the incoming line to every line already recorded at
/// that station, then records it there.
#[derive(Debug)]
pub struct AdjacencyBuilder {
    distances: LineDistances,
    serving: HashMap<StationId, Vec<LineId>>,
}

impl AdjacencyBuilder {
    pub fn new(line_count: usize) -> Self {
        Self {
            distances: LineDistances::isolated(line_count),
            serving: HashMap::new(),
        }
    }

    /// Record that `line` stops at `station`.
    pub fn observe(&mut self, station: StationId, line: LineId) -> TransferResult<()> {
        if line.slot() >= self.distances.line_count() {
            return Err(TransferError::LineOutOfRange(line));
        }
        let known = self.serving.entry(station).or_default();
        if known.contains(&line) {
            return Ok(());
        }
        for &existing in known.iter() {
            self.distances.link(existing, line)?;
        }
        known.push(line);
        Ok(())
    }

    pub fn finish(self) -> LineDistances {
        self.distances
    }
}

/// Derive the initial line distance matrix from a frozen network.
pub fn build_line_adjacency(network: &Network) -> LineDistances {
    let mut distances = LineDistances::isolated(network.line_count());

    for station in network.stations() {
        for (pos, &line) in station.lines.iter().enumerate() {
            for &earlier in &station.lines[..pos] {
                // Network validation guarantees both ids are in range
                if let Err(err) = distances.link(earlier, line) {
                    debug!(%err, "skipping out-of-range membership");
                }
            }
        }
    }

    debug!(
        lines = distances.line_count(),
        edges = distances.edge_count(),
        "line adjacency built"
    );
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_network::parse_listing;

    fn line(i: u32) -> LineId {
        LineId::from_index(i)
    }

    #[test]
    fn isolated_has_zero_diagonal_only() {
        let d = LineDistances::isolated(3);
        assert_eq!(d.get(line(1), line(1)), Distance::ZERO);
        assert_eq!(d.get(line(0), line(2)), Distance::INFINITY);
        assert_eq!(d.edge_count(), 0);
    }

    #[test]
    fn link_is_symmetric_and_ignores_self() {
        let mut d = LineDistances::isolated(2);
        d.link(line(0), line(1)).unwrap();
        d.link(line(1), line(1)).unwrap();
        assert_eq!(d.get(line(1), line(0)), Distance::ONE);
        assert_eq!(d.get(line(1), line(1)), Distance::ZERO);
        assert!(d.is_symmetric());
    }

    #[test]
    fn link_out_of_range_fails() {
        let mut d = LineDistances::isolated(1);
        let err = d.link(line(0), line(4)).unwrap_err();
        assert_eq!(err, TransferError::LineOutOfRange(line(4)));
    }

    #[test]
    fn shared_station_forms_clique() {
        let net = parse_listing("3 A 1 Hub B 1 Hub C 1 Hub").unwrap();
        let d = build_line_adjacency(&net);
        assert_eq!(d.edge_count(), 3);
        assert_eq!(d.get(line(1), line(2)), Distance::ONE);
    }

    #[test]
    fn single_line_station_adds_nothing() {
        let net = parse_listing("2 A 2 x y B 1 z").unwrap();
        let d = build_line_adjacency(&net);
        assert_eq!(d.edge_count(), 0);
    }

    #[test]
    fn streaming_matches_frozen_build() {
        let net = parse_listing("3 A 2 p q B 2 q r C 2 r p").unwrap();

        let mut streaming = AdjacencyBuilder::new(net.line_count());
        for l in net.lines() {
            for &s in &l.stations {
                streaming.observe(s, l.id).unwrap();
            }
        }
        assert_eq!(streaming.finish(), build_line_adjacency(&net));
    }

    #[test]
    fn streaming_rejects_unknown_line() {
        let mut b = AdjacencyBuilder::new(1);
        let err = b
            .observe(StationId::from_index(0), line(3))
            .unwrap_err();
        assert_eq!(err, TransferError::LineOutOfRange(line(3)));
    }
}
