//! Reading a written station matrix back for pair lookups.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lh_core::Transfers;
use tracing::debug;

use crate::marker::UnreachableMarker;
use crate::dialect::delimiter_byte;
use crate::{ResultsError, ResultsResult};

/// In-memory station matrix parsed from delimited text.
#[derive(Debug, Clone)]
pub struct TransferTable {
    stations: Vec<String>,
    index: HashMap<String, usize>,
    cells: Vec<Transfers>,
}

impl TransferTable {
    pub fn read_file(
        path: &Path,
        delimiter: char,
        unreachable: &UnreachableMarker,
    ) -> ResultsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, delimiter, unreachable)
    }

    /// Parse a table produced by [`crate::MatrixWriter`] with the same settings.
    pub fn parse(
        text: &str,
        delimiter: char,
        unreachable: &UnreachableMarker,
    ) -> ResultsResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter_byte(delimiter)?)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut records = rdr.records();

        let header = records.next().transpose()?.ok_or_else(|| ResultsError::Shape {
            message: "missing header row".to_string(),
        })?;
        let stations: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
        let n = stations.len();

        let mut index = HashMap::with_capacity(n);
        for (i, name) in stations.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(ResultsError::Shape {
                    message: format!("station '{name}' appears twice in the header"),
                });
            }
        }

        let mut cells = Vec::with_capacity(n * n);
        let mut row_count = 0;
        for (row, record) in records.enumerate() {
            let record = record?;
            if row >= n {
                return Err(ResultsError::Shape {
                    message: format!("more rows than the {n} stations in the header"),
                });
            }
            if record.len() != n + 1 {
                return Err(ResultsError::Shape {
                    message: format!(
                        "row {} has {} values, expected {n}",
                        row + 1,
                        record.len().saturating_sub(1)
                    ),
                });
            }
            let label = record.get(0).unwrap_or_default();
            if label != stations[row] {
                return Err(ResultsError::Shape {
                    message: format!(
                        "row {} is labelled '{label}' but the header says '{}'",
                        row + 1,
                        stations[row]
                    ),
                });
            }

            for (column, value) in record.iter().enumerate().skip(1) {
                cells.push(parse_cell(value, unreachable, row + 1, column)?);
            }
            row_count += 1;
        }

        if row_count != n {
            return Err(ResultsError::Shape {
                message: format!("{row_count} rows for {n} stations"),
            });
        }

        debug!(stations = n, "transfer table parsed");
        Ok(Self {
            stations,
            index,
            cells,
        })
    }

    /// Station names in table order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Transfers between two named stations; `None` if either name is unknown.
    pub fn lookup(&self, from: &str, to: &str) -> Option<Transfers> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        self.cells.get(i * self.stations.len() + j).copied()
    }
}

fn parse_cell(
    value: &str,
    unreachable: &UnreachableMarker,
    row: usize,
    column: usize,
) -> ResultsResult<Transfers> {
    if unreachable.matches(value) {
        return Ok(Transfers::Unreachable);
    }
    value
        .trim()
        .parse::<u32>()
        .map(Transfers::Reachable)
        .map_err(|_| ResultsError::InvalidCell {
            row,
            column,
            value: value.to_string(),
        })
}
