//! Byte codecs for persisting a graph.
//!
//! # Formats
//!
//! - [`binary`]: bincode snapshot of the adjacency listing
//! - [`csv`]: one line per vertex, `vertex;neighbor1;neighbor2;...`
//! - [`condensed`]: one line per isolated vertex or per edge, `a;b` with `a < b`
//!
//! Every decoder accepts empty input as the empty graph and only returns a
//! graph that passes structural validation.

pub mod binary;
pub mod condensed;
pub mod csv;

use crate::error::{GraphError, GraphResult};

/// Decode UTF-8 text and split it into non-empty lines.
///
/// Lines end at LF with an optional CR before it. Nothing else is stripped:
/// spaces are part of the words.
pub(crate) fn text_lines(data: &[u8]) -> GraphResult<Vec<String>> {
    let text = std::str::from_utf8(data)
        .map_err(|err| GraphError::Decode(format!("payload is not valid UTF-8: {err}")))?;
    Ok(text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lines_normalizes_crlf_and_skips_blanks() {
        let lines = text_lines(b"\r\na;b\r\n\r\nc\n\n").unwrap();
        assert_eq!(lines, vec!["a;b", "c"]);
    }

    #[test]
    fn text_lines_keeps_spaces_in_edge_lines() {
        let lines = text_lines(b" \napple;zebra \r\n zebra ;apple\n  ").unwrap();
        assert_eq!(lines, vec![" ", "apple;zebra ", " zebra ;apple", "  "]);
    }

    #[test]
    fn text_lines_strips_one_carriage_return() {
        let lines = text_lines(b"a\r\r\n\r\n").unwrap();
        assert_eq!(lines, vec!["a\r"]);
    }

    #[test]
    fn text_lines_rejects_invalid_utf8() {
        let err = text_lines(&[0x61, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, GraphError::Decode(_)));
    }
}
