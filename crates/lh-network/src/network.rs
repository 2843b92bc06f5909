//! Core network data structures.

use std::collections::HashMap;
use std::fmt::Write as _;

use lh_core::{LineId, StationId};

/// A named transit route and the stations it visits, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Visit order as listed. May repeat a station if the listing does.
    pub stations: Vec<StationId>,
}

/// A named stop and the lines serving it.
///
/// `lines` holds each serving line once, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lines: Vec<LineId>,
}

/// The network: a validated, immutable set of lines, stations, and memberships.
///
/// Lines and stations are stored in vectors indexed by their IDs, with a
/// separate name index per identifier space.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) lines: Vec<Line>,
    pub(crate) stations: Vec<Station>,
    pub(crate) line_names: HashMap<String, LineId>,
    pub(crate) station_names: HashMap<String, StationId>,
}

impl Network {
    /// Return all lines, ordered by ID.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Return all stations, ordered by ID.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of (line, station) memberships as listed.
    pub fn membership_count(&self) -> usize {
        self.lines.iter().map(|l| l.stations.len()).sum()
    }

    /// Get a line by ID (returns None if ID out of bounds).
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.slot())
    }

    /// Get a station by ID (returns None if ID out of bounds).
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.slot())
    }

    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.line_names.get(name).and_then(|&id| self.line(id))
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.station_names.get(name).and_then(|&id| self.station(id))
    }

    /// Lines serving a station; empty for unknown IDs.
    pub fn serving_lines(&self, id: StationId) -> &[LineId] {
        self.station(id).map(|s| s.lines.as_slice()).unwrap_or(&[])
    }

    /// Human-readable dump: one row per line, its stations in visit order.
    pub fn describe_lines(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = write!(out, "{}:", line.name);
            for &sid in &line.stations {
                if let Some(station) = self.station(sid) {
                    let _ = write!(out, " {}", station.name);
                }
            }
            out.push('\n');
        }
        out
    }
}
