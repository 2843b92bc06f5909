//! Parser for the flat line/station listing.
//!
//! The listing is a stream of whitespace-separated tokens:
//!
//! ```text
//! <line count T>
//! <line name> <N> <station 1> ... <station N>     (repeated T times)
//! ```
//!
//! Line and station IDs are assigned in first-seen order. A count that
//! overruns the stream is a hard error; nothing is ever read past the end.

use tracing::{debug, warn};

use crate::builder::NetworkBuilder;
use crate::error::{NetworkError, NetworkResult};
use crate::network::Network;

/// Token stream that remembers 1-based positions for error messages.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn pull(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.position += 1;
        Some(token)
    }

    fn expect(&mut self, expected: &'static str) -> NetworkResult<&'a str> {
        self.pull().ok_or(NetworkError::Truncated {
            position: self.position + 1,
            expected,
        })
    }

    fn count(&mut self, expected: &'static str) -> NetworkResult<usize> {
        let token = self.expect(expected)?;
        token.parse::<usize>().map_err(|_| NetworkError::InvalidCount {
            position: self.position,
            token: token.to_string(),
        })
    }
}

/// Parse a complete listing into a frozen `Network`.
pub fn parse_listing(text: &str) -> NetworkResult<Network> {
    let mut tokens = Tokens::new(text);
    let mut builder = NetworkBuilder::new();

    let line_records = tokens.count("line count")?;
    debug!(line_records, "parsing listing");

    for _ in 0..line_records {
        let name = tokens.expect("line name")?;
        let declared = tokens.count("station count")?;
        let line = builder.add_line(name)?;

        for found in 0..declared {
            let position = tokens.position + 1;
            let station = tokens.pull().ok_or_else(|| NetworkError::MalformedInput {
                position,
                line: name.to_string(),
                expected: declared,
                found,
            })?;
            builder.serve(line, station)?;
        }
    }

    let trailing = std::iter::from_fn(|| tokens.pull()).count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last declared line");
    }

    let network = builder.build()?;
    debug!(
        lines = network.line_count(),
        stations = network.station_count(),
        memberships = network.membership_count(),
        "listing parsed"
    );
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_lines() {
        let net = parse_listing("2\nLine1 2 S1 S2\nLine2 2 S2 S3\n").unwrap();
        assert_eq!(net.line_count(), 2);
        assert_eq!(net.station_count(), 3);

        let s2 = net.station_by_name("S2").unwrap();
        assert_eq!(s2.lines.len(), 2);
        assert_eq!(s2.id.index(), 1);
    }

    #[test]
    fn ids_follow_first_sight() {
        let net = parse_listing("2 B 2 y x A 1 z").unwrap();
        let names: Vec<_> = net.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["y", "x", "z"]);
        assert_eq!(net.lines()[0].name, "B");
    }

    #[test]
    fn overrunning_count_is_malformed() {
        let err = parse_listing("1 Red 4 A B").unwrap_err();
        assert_eq!(
            err,
            NetworkError::MalformedInput {
                position: 6,
                line: "Red".into(),
                expected: 4,
                found: 2,
            }
        );
    }

    #[test]
    fn malformed_position_points_past_last_token() {
        let err = parse_listing("2 Red 1 A Blue 3 A B").unwrap_err();
        assert_eq!(
            err,
            NetworkError::MalformedInput {
                position: 9,
                line: "Blue".into(),
                expected: 3,
                found: 2,
            }
        );
        assert!(err.to_string().contains("token 9"));
    }

    #[test]
    fn missing_record_is_truncated() {
        let err = parse_listing("2 Red 1 A").unwrap_err();
        assert_eq!(
            err,
            NetworkError::Truncated {
                position: 5,
                expected: "line name",
            }
        );
    }

    #[test]
    fn empty_input_is_truncated() {
        let err = parse_listing("   \n").unwrap_err();
        assert!(matches!(err, NetworkError::Truncated { position: 1, .. }));
    }

    #[test]
    fn negative_count_is_invalid() {
        let err = parse_listing("1 Red -2 A B").unwrap_err();
        assert_eq!(
            err,
            NetworkError::InvalidCount {
                position: 3,
                token: "-2".into(),
            }
        );
    }

    #[test]
    fn zero_station_line_is_kept() {
        let net = parse_listing("2 Ghost 0 Red 1 A").unwrap();
        assert_eq!(net.line_count(), 2);
        assert!(net.line_by_name("Ghost").unwrap().stations.is_empty());
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let net = parse_listing("1 Red 1 A extra tokens").unwrap();
        assert_eq!(net.station_count(), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsed_memberships_mirror_listing(
            lines in prop::collection::vec(prop::collection::vec(0_u8..10, 0..6), 0..6)
        ) {
            let mut text = lines.len().to_string();
            for (i, stops) in lines.iter().enumerate() {
                text.push_str(&format!("\nL{i} {}", stops.len()));
                for s in stops {
                    text.push_str(&format!(" S{s}"));
                }
            }

            let net = parse_listing(&text).unwrap();
            prop_assert_eq!(net.line_count(), lines.len());
            prop_assert_eq!(
                net.membership_count(),
                lines.iter().map(Vec::len).sum::<usize>()
            );
            for line in net.lines() {
                for &sid in &line.stations {
                    prop_assert!(net.serving_lines(sid).contains(&line.id));
                }
            }
        }

        #[test]
        fn overstated_count_never_reads_past_end(extra in 1_usize..50) {
            let text = format!("1 L {} a b", 2 + extra);
            let is_malformed = matches!(
                parse_listing(&text),
                Err(NetworkError::MalformedInput { found: 2, .. })
            );
            prop_assert!(is_malformed);
        }
    }
}
