//! Station projection of closed line distances.
//!
//! `result[i][j]` is the minimum closed line distance over every
//! (line serving i, line serving j) pair. A station with no serving line
//! gets an all-infinite row and column, diagonal included.

use lh_core::{Distance, LineId, StationId, Transfers};
use lh_network::Network;
use tracing::debug;

use crate::adjacency::LineDistances;
use crate::error::{TransferError, TransferResult};
use crate::matrix::SquareMatrix;

/// Station-to-station minimum transfer counts. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDistances {
    matrix: SquareMatrix<Distance>,
}

impl StationDistances {
    pub fn station_count(&self) -> usize {
        self.matrix.size()
    }

    /// Raw ordinal, infinity included.
    pub fn distance(&self, from: StationId, to: StationId) -> Distance {
        self.matrix.get(from.slot(), to.slot())
    }

    /// Tagged outcome for consumers.
    pub fn transfers(&self, from: StationId, to: StationId) -> Transfers {
        self.distance(from, to).into()
    }

    /// Checked variant of [`Self::transfers`] for IDs from another network.
    pub fn try_transfers(&self, from: StationId, to: StationId) -> TransferResult<Transfers> {
        for id in [from, to] {
            if id.slot() >= self.station_count() {
                return Err(TransferError::StationOutOfRange(id));
            }
        }
        Ok(self.transfers(from, to))
    }

    /// Rows of tagged outcomes, in station ID order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Transfers>> + '_ {
        self.matrix
            .rows()
            .map(|row| row.iter().map(|&d| Transfers::from(d)).collect::<Vec<_>>())
    }

    /// Number of ordered station pairs with no connecting path.
    pub fn unreachable_pairs(&self) -> usize {
        self.matrix
            .rows()
            .flat_map(|row| row.iter())
            .filter(|d| !d.is_finite())
            .count()
    }

    pub fn matrix(&self) -> &SquareMatrix<Distance> {
        &self.matrix
    }
}

/// Minimum closed distance over every (a in `from_lines`, b in `to_lines`).
///
/// Infinite when either side has no lines.
pub fn pair_distance(
    closed: &LineDistances,
    from_lines: &[LineId],
    to_lines: &[LineId],
) -> Distance {
    from_lines
        .iter()
        .flat_map(|&a| to_lines.iter().map(move |&b| closed.get(a, b)))
        .min()
        .unwrap_or(Distance::INFINITY)
}

fn check_lines(network: &Network, closed: &LineDistances) -> TransferResult<()> {
    if closed.line_count() != network.line_count() {
        return Err(TransferError::DimensionMismatch {
            what: "line distances",
            expected: network.line_count(),
            found: closed.line_count(),
        });
    }
    Ok(())
}

/// Project a single station pair without building the full matrix.
pub fn project_pair(
    network: &Network,
    closed: &LineDistances,
    from: StationId,
    to: StationId,
) -> TransferResult<Transfers> {
    check_lines(network, closed)?;
    let from = network
        .station(from)
        .ok_or(TransferError::StationOutOfRange(from))?;
    let to = network
        .station(to)
        .ok_or(TransferError::StationOutOfRange(to))?;
    Ok(pair_distance(closed, &from.lines, &to.lines).into())
}

/// Reduce a closed line matrix to station distances.
pub fn project_stations(
    network: &Network,
    closed: &LineDistances,
) -> TransferResult<StationDistances> {
    check_lines(network, closed)?;

    let stations = network.stations();
    let mut matrix = SquareMatrix::filled(stations.len(), Distance::INFINITY);
    for origin in stations {
        for destination in stations {
            let d = pair_distance(closed, &origin.lines, &destination.lines);
            matrix.set(origin.id.slot(), destination.id.slot(), d);
        }
    }

    let projected = StationDistances { matrix };
    debug!(
        stations = projected.station_count(),
        unreachable = projected.unreachable_pairs(),
        "station projection complete"
    );
    Ok(projected)
}
