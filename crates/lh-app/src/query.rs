//! Single-pair queries.

use std::path::Path;

use lh_core::Transfers;
use lh_network::{Network, Station};
use lh_results::{TransferTable, UnreachableMarker};
use lh_transfer::{ClosureStrategy, TransferEngine, project_pair};

use crate::error::{AppError, AppResult};

fn station<'n>(network: &'n Network, name: &str) -> AppResult<&'n Station> {
    network
        .station_by_name(name)
        .ok_or_else(|| AppError::StationNotFound(name.to_string()))
}

/// Minimum transfers between two named stations.
///
/// Closes the line matrix but projects only the requested pair.
pub fn min_transfers(
    network: &Network,
    from: &str,
    to: &str,
    strategy: ClosureStrategy,
) -> AppResult<Transfers> {
    let from = station(network, from)?;
    let to = station(network, to)?;

    let engine = TransferEngine::new(strategy);
    let mut lines = engine.adjacency(network);
    engine.close(&mut lines);

    Ok(project_pair(network, &lines, from.id, to.id)?)
}

/// Look up a pair in a previously written matrix file.
pub fn lookup_table(
    path: &Path,
    from: &str,
    to: &str,
    delimiter: char,
    unreachable: &UnreachableMarker,
) -> AppResult<Transfers> {
    let table = TransferTable::read_file(path, delimiter, unreachable)?;
    for name in [from, to] {
        if table.lookup(name, name).is_none() {
            return Err(AppError::StationNotFound(name.to_string()));
        }
    }
    table
        .lookup(from, to)
        .ok_or_else(|| AppError::StationNotFound(format!("{from} -> {to}")))
}
