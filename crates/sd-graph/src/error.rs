//! Graph-specific error types.

use sd_core::{ErrorKind, NameViolation};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph mutation, validation and codec errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex name is empty or contains the separator.
    #[error("graph: invalid vertex {word:?}: {reason}")]
    InvalidVertex { word: String, reason: NameViolation },

    /// The same vertex heads two adjacency lines.
    #[error("graph: duplicate vertex {word:?} found")]
    DuplicateVertex { word: String },

    /// A condensed line has neither one nor two fields.
    #[error("graph: invalid number of vertices ({fields}) in line {line:?}")]
    MalformedLine { line: String, fields: usize },

    /// `from` lists `to` as a neighbor but not the other way round.
    #[error("graph: edge {from:?} -> {to:?} is not symmetric")]
    AsymmetricEdge { from: String, to: String },

    /// A vertex lists itself as a neighbor.
    #[error("graph: self-loop detected at vertex {word:?}")]
    SelfLoop { word: String },

    /// `from` lists `word` as a neighbor, but `word` is not a vertex.
    #[error("graph: vertex {word:?} referenced from {from:?} does not exist")]
    DanglingReference { word: String, from: String },

    #[error("graph: serialization failed: {0}")]
    Encode(String),

    #[error("graph: deserialization failed: {0}")]
    Decode(String),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidVertex { .. } => ErrorKind::InvalidVertex,
            GraphError::DuplicateVertex { .. } => ErrorKind::DuplicateVertex,
            GraphError::MalformedLine { .. } => ErrorKind::MalformedLine,
            GraphError::AsymmetricEdge { .. } => ErrorKind::AsymmetricEdge,
            GraphError::SelfLoop { .. } => ErrorKind::SelfLoop,
            GraphError::DanglingReference { .. } => ErrorKind::DanglingReference,
            GraphError::Encode(_) | GraphError::Decode(_) => ErrorKind::Codec,
        }
    }

    pub(crate) fn invalid_vertex(word: &str, reason: NameViolation) -> Self {
        GraphError::InvalidVertex {
            word: word.to_string(),
            reason,
        }
    }
}
