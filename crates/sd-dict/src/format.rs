//! Persistence format table.

use std::path::{Path, PathBuf};

use sd_graph::codec::{binary, condensed, csv};
use sd_graph::{Graph, GraphResult};

use crate::error::{DictError, DictResult};

/// A supported import/export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Binary snapshot.
    Gob,
    /// Full adjacency CSV.
    Csv,
    /// Condensed edge-list CSV.
    Csvc,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Gob, Format::Csv, Format::Csvc];

    /// Look a format up by its command-line name.
    pub fn from_name(name: &str) -> DictResult<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| DictError::UnsupportedFormat {
                name: name.to_string(),
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Gob => "gob",
            Format::Csv => "csv",
            Format::Csvc => "csvc",
        }
    }

    /// Canonical file suffix, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Gob => ".gob",
            Format::Csv => ".csv",
            Format::Csvc => ".csvc",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Gob => "binary snapshot",
            Format::Csv => "CSV",
            Format::Csvc => "CSV condensed",
        }
    }

    /// Text formats get byte-order-mark handling.
    pub fn is_text(self) -> bool {
        !matches!(self, Format::Gob)
    }

    /// Append the canonical suffix unless `path` already ends with it.
    ///
    /// The path's bytes are kept as they are, even when they are not UTF-8.
    pub fn with_extension(self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        let name = path.as_os_str();
        if name.as_encoded_bytes().ends_with(self.extension().as_bytes()) {
            return path.to_path_buf();
        }
        let mut name = name.to_owned();
        name.push(self.extension());
        PathBuf::from(name)
    }

    pub fn encode(self, graph: &Graph) -> GraphResult<Vec<u8>> {
        match self {
            Format::Gob => binary::encode(graph),
            Format::Csv => Ok(csv::encode(graph)),
            Format::Csvc => Ok(condensed::encode(graph)),
        }
    }

    pub fn decode(self, data: &[u8]) -> GraphResult<Graph> {
        match self {
            Format::Gob => binary::decode(data),
            Format::Csv => csv::decode(data),
            Format::Csvc => condensed::decode(data),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::ErrorKind;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Format::from_name("gob").unwrap(), Format::Gob);
        assert_eq!(Format::from_name("csv").unwrap(), Format::Csv);
        assert_eq!(Format::from_name("csvc").unwrap(), Format::Csvc);
        let err = Format::from_name("xml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn with_extension_appends_once() {
        assert_eq!(Format::Csv.with_extension("dict"), PathBuf::from("dict.csv"));
        assert_eq!(Format::Csv.with_extension("dict.csv"), PathBuf::from("dict.csv"));
        assert_eq!(
            Format::Csvc.with_extension("out/dict.csv"),
            PathBuf::from("out/dict.csv.csvc")
        );
    }

    #[cfg(unix)]
    #[test]
    fn with_extension_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"dict\xff");
        let path = Format::Gob.with_extension(raw);
        assert_eq!(path.as_os_str().as_bytes(), b"dict\xff.gob");
        assert_eq!(Format::Gob.with_extension(&path), path);
    }

    #[test]
    fn only_binary_is_not_text() {
        assert!(!Format::Gob.is_text());
        assert!(Format::Csv.is_text());
        assert!(Format::Csvc.is_text());
    }
}
