//! Vertex-name rules.
//!
//! The graph layer only forbids empty names, the field separator and line
//! breaks; the dictionary layer adds its own stricter word pattern on top.

use thiserror::Error;

/// Field separator of both CSV formats; never allowed inside a vertex name.
pub const SEPARATOR: char = ';';

/// Why a name cannot be a vertex.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    #[error("vertex cannot be empty")]
    Empty,

    #[error("vertex contains invalid character \";\"")]
    Separator,

    #[error("vertex contains a line break")]
    LineBreak,
}

/// Check that `name` may be stored as a vertex.
pub fn check_vertex_name(name: &str) -> Result<(), NameViolation> {
    if name.is_empty() {
        return Err(NameViolation::Empty);
    }
    if name.contains(SEPARATOR) {
        return Err(NameViolation::Separator);
    }
    if name.contains(['\n', '\r']) {
        return Err(NameViolation::LineBreak);
    }
    Ok(())
}
