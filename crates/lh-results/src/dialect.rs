//! Delimiter rules shared by the writer and the reader.

use crate::{ResultsError, ResultsResult};

/// Byte form of `delimiter` for the csv reader and writer.
///
/// Only single-byte ASCII is accepted, and never the quote character or a
/// line break, since those carry meaning in the quoting rules.
pub fn delimiter_byte(delimiter: char) -> ResultsResult<u8> {
    match delimiter {
        '"' | '\n' | '\r' => Err(ResultsError::InvalidDelimiter(delimiter)),
        d if d.is_ascii() => Ok(d as u8),
        d => Err(ResultsError::InvalidDelimiter(d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ascii_separators() {
        assert_eq!(delimiter_byte(',').unwrap(), b',');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert_eq!(delimiter_byte(';').unwrap(), b';');
    }

    #[test]
    fn rejects_quote_newline_and_non_ascii() {
        for d in ['"', '\n', '\r', '§', '→'] {
            assert!(matches!(
                delimiter_byte(d),
                Err(ResultsError::InvalidDelimiter(c)) if c == d
            ));
        }
    }
}
