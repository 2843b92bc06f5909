//! Rendering of unreachable station pairs.

use std::fmt;
use std::str::FromStr;

use lh_core::Transfers;
use serde::{Deserialize, Serialize};

/// What to print where no path exists.
///
/// Some consumers want a numeric placeholder they can feed straight into
/// integer parsing, others a textual marker. YAML accepts either form:
/// `unreachable: 99` or `unreachable: "-"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnreachableMarker {
    Number(u64),
    Text(String),
}

impl Default for UnreachableMarker {
    fn default() -> Self {
        UnreachableMarker::Text("-".to_string())
    }
}

impl UnreachableMarker {
    /// Render one cell.
    pub fn render(&self, cell: Transfers) -> String {
        match cell {
            Transfers::Reachable(d) => d.to_string(),
            Transfers::Unreachable => self.to_string(),
        }
    }

    /// True if a reachable count would print exactly like this marker.
    pub fn collides_with(&self, count: u32) -> bool {
        match self {
            UnreachableMarker::Number(n) => *n == u64::from(count),
            UnreachableMarker::Text(t) => t.trim() == count.to_string(),
        }
    }

    /// Classify a cell read back from a table.
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            UnreachableMarker::Number(n) => cell.trim().parse::<u64>() == Ok(*n),
            UnreachableMarker::Text(t) => cell.trim() == t.trim(),
        }
    }
}

impl fmt::Display for UnreachableMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableMarker::Number(n) => write!(f, "{n}"),
            UnreachableMarker::Text(t) => write!(f, "{t}"),
        }
    }
}

impl FromStr for UnreachableMarker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => UnreachableMarker::Number(n),
            Err(_) => UnreachableMarker::Text(s.to_string()),
        })
    }
}
