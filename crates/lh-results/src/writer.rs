//! Station matrix writer.
//!
//! Layout: a header row holding an empty corner cell followed by every
//! station name, then one row per station: its name followed by the
//! transfer count to each station in ID order. Quoting follows the csv
//! crate's rules, so a network with no stations writes a header made of a
//! single quoted empty field.

use std::fs;
use std::io::Write;
use std::path::Path;

use lh_core::Transfers;
use lh_network::Network;
use lh_transfer::StationDistances;
use tracing::info;

use crate::marker::UnreachableMarker;
use crate::dialect::delimiter_byte;
use crate::{ResultsError, ResultsResult};

#[derive(Debug, Clone)]
pub struct MatrixWriter {
    delimiter: char,
    delimiter_byte: u8,
    unreachable: UnreachableMarker,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            delimiter_byte: b',',
            unreachable: UnreachableMarker::default(),
        }
    }
}

impl MatrixWriter {
    pub fn new(delimiter: char, unreachable: UnreachableMarker) -> ResultsResult<Self> {
        Ok(Self {
            delimiter,
            delimiter_byte: delimiter_byte(delimiter)?,
            unreachable,
        })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn unreachable(&self) -> &UnreachableMarker {
        &self.unreachable
    }

    /// Render the whole table into a string.
    pub fn render(&self, network: &Network, distances: &StationDistances) -> ResultsResult<String> {
        let mut buf = Vec::new();
        self.write_to(network, distances, &mut buf)?;
        // Every piece written is a &str, so the buffer is valid UTF-8
        String::from_utf8(buf).map_err(|e| ResultsError::Shape {
            message: e.to_string(),
        })
    }

    pub fn write_to<W: Write>(
        &self,
        network: &Network,
        distances: &StationDistances,
        out: W,
    ) -> ResultsResult<()> {
        if distances.station_count() != network.station_count() {
            return Err(ResultsError::DimensionMismatch {
                expected: network.station_count(),
                found: distances.station_count(),
            });
        }

        let stations = network.stations();
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter_byte)
            .from_writer(out);

        wtr.write_record(
            std::iter::once("").chain(stations.iter().map(|s| s.name.as_str())),
        )?;

        let mut record = Vec::with_capacity(stations.len() + 1);
        for (station, row) in stations.iter().zip(distances.rows()) {
            record.clear();
            record.push(station.name.clone());
            for cell in row {
                if let Transfers::Reachable(count) = cell {
                    if self.unreachable.collides_with(count) {
                        return Err(ResultsError::AmbiguousMarker {
                            marker: self.unreachable.to_string(),
                        });
                    }
                }
                record.push(self.unreachable.render(cell));
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn write_file(
        &self,
        path: &Path,
        network: &Network,
        distances: &StationDistances,
    ) -> ResultsResult<()> {
        let rendered = self.render(network, distances)?;
        fs::write(path, rendered)?;
        info!(
            path = %path.display(),
            stations = network.station_count(),
            "station matrix written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_network::parse_listing;
    use lh_transfer::{ClosureStrategy, TransferEngine};

    fn stations_of(listing: &str) -> (Network, StationDistances) {
        let net = parse_listing(listing).unwrap();
        let out = TransferEngine::new(ClosureStrategy::Sequential)
            .run(&net)
            .unwrap();
        (net, out.stations)
    }

    #[test]
    fn renders_header_and_rows() {
        let (net, d) = stations_of("2 Line1 2 S1 S2 Line2 2 S2 S3");
        let text = MatrixWriter::default().render(&net, &d).unwrap();
        assert_eq!(text, ",S1,S2,S3\nS1,0,0,1\nS2,0,0,0\nS3,1,0,0\n");
    }

    #[test]
    fn unreachable_uses_marker() {
        let (net, d) = stations_of("2 A 1 x B 1 y");
        let text = MatrixWriter::new(';', UnreachableMarker::Number(1 << 30))
            .unwrap()
            .render(&net, &d)
            .unwrap();
        assert_eq!(text, ";x;y\nx;0;1073741824\ny;1073741824;0\n");
    }

    #[test]
    fn names_with_delimiter_are_quoted() {
        let (net, d) = stations_of("1 L 2 Bank,East West");
        let text = MatrixWriter::default().render(&net, &d).unwrap();
        assert!(text.starts_with(",\"Bank,East\",West\n\"Bank,East\",0,0\n"));
    }

    #[test]
    fn empty_network_writes_quoted_corner() {
        let (net, d) = stations_of("1 Ghost 0");
        let text = MatrixWriter::default().render(&net, &d).unwrap();
        assert_eq!(text, "\"\"\n");
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let err = MatrixWriter::new('§', UnreachableMarker::default()).unwrap_err();
        assert!(matches!(err, ResultsError::InvalidDelimiter('§')));
    }

    #[test]
    fn colliding_numeric_marker_is_rejected() {
        let (net, d) = stations_of("1 L 2 a b");
        let err = MatrixWriter::new(',', UnreachableMarker::Number(0))
            .unwrap()
            .render(&net, &d)
            .unwrap_err();
        assert!(matches!(err, ResultsError::AmbiguousMarker { .. }));
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let (net, _) = stations_of("1 L 2 a b");
        let (_, other) = stations_of("1 L 1 a");
        let err = MatrixWriter::default().render(&net, &other).unwrap_err();
        assert!(matches!(
            err,
            ResultsError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));
    }
}
