//! Incremental network builder.

use std::collections::HashMap;

use lh_core::{Distance, LhError, LineId, StationId};
use tracing::warn;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Line, Network, Station};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_line`, `add_station` and `add_membership` (or the `serve`
/// shorthand) to record memberships, then call `build()` to validate and
/// freeze them into an immutable `Network`. Adjacency is never derived here.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    lines: Vec<Line>,
    stations: Vec<Station>,
    line_names: HashMap<String, LineId>,
    station_names: HashMap<String, StationId>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line and return its ID.
    ///
    /// A repeated name resolves to the ID issued on first sight.
    pub fn add_line(&mut self, name: impl Into<String>) -> NetworkResult<LineId> {
        let name = name.into();
        if let Some(&id) = self.line_names.get(&name) {
            warn!(line = %name, "duplicate line name, reusing first id");
            return Ok(id);
        }
        let id = LineId::try_from_index(self.lines.len())?;
        self.line_names.insert(name.clone(), id);
        self.lines.push(Line {
            id,
            name,
            stations: Vec::new(),
        });
        Ok(id)
    }

    /// Add a station and return its ID. A repeated name returns the existing ID.
    pub fn add_station(&mut self, name: impl Into<String>) -> NetworkResult<StationId> {
        let name = name.into();
        if let Some(&id) = self.station_names.get(&name) {
            return Ok(id);
        }
        let id = StationId::try_from_index(self.stations.len())?;
        self.station_names.insert(name.clone(), id);
        self.stations.push(Station {
            id,
            name,
            lines: Vec::new(),
        });
        Ok(id)
    }

    /// Record that `line` visits `station` next.
    pub fn add_membership(&mut self, line: LineId, station: StationId) -> NetworkResult<()> {
        let station_entry = self
            .stations
            .get_mut(station.slot())
            .ok_or(NetworkError::UnknownStation(station))?;
        let line_entry = self
            .lines
            .get_mut(line.slot())
            .ok_or(NetworkError::UnknownLine(line))?;

        line_entry.stations.push(station);
        if station_entry.lines.contains(&line) {
            warn!(
                line = %line_entry.name,
                station = %station_entry.name,
                "station listed more than once on the same line"
            );
        } else {
            station_entry.lines.push(line);
        }
        Ok(())
    }

    /// Add (or find) a station by name and append it to `line`.
    pub fn serve(&mut self, line: LineId, station: impl Into<String>) -> NetworkResult<StationId> {
        let station = self.add_station(station)?;
        self.add_membership(line, station)?;
        Ok(station)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Validate and freeze the network.
    pub fn build(self) -> NetworkResult<Network> {
        // Closure distances top out at line_count - 1 and must stay finite.
        if self.lines.len() > Distance::MAX_FINITE as usize {
            return Err(LhError::Capacity {
                what: "lines",
                count: self.lines.len(),
                max: Distance::MAX_FINITE as usize,
            }
            .into());
        }

        validate::validate_memberships(&self.lines, &self.stations)?;

        for station in self.stations.iter().filter(|s| s.lines.is_empty()) {
            warn!(station = %station.name, "station is served by no line");
        }

        Ok(Network {
            lines: self.lines,
            stations: self.stations,
            line_names: self.line_names,
            station_names: self.station_names,
        })
    }
}
