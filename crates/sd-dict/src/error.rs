//! Dictionary error types.

use std::path::PathBuf;

use sd_core::ErrorKind;
use sd_graph::GraphError;
use thiserror::Error;

pub type DictResult<T> = Result<T, DictError>;

/// Dictionary errors. Every message fits on one line.
#[derive(Error, Debug)]
pub enum DictError {
    #[error("dictionary: word {word:?} does not match the conditions (letters, spaces and hyphens only)")]
    InvalidWord { word: String },

    #[error("dictionary: word {word:?} does not exist")]
    NotFound { word: String },

    #[error("dictionary: word {word:?} already exists")]
    AlreadyExists { word: String },

    #[error("dictionary: words {a:?} and {b:?} already are direct-linked synonyms")]
    AlreadyLinked { a: String, b: String },

    #[error("dictionary: words {a:?} and {b:?} are not direct-linked synonyms")]
    NotLinked { a: String, b: String },

    #[error("format {name:?} is not supported")]
    UnsupportedFormat { name: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("file read failed: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file write failed: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DictError::InvalidWord { .. } => ErrorKind::InvalidVertex,
            DictError::NotFound { .. } => ErrorKind::NotFound,
            DictError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            DictError::AlreadyLinked { .. } => ErrorKind::AlreadyLinked,
            DictError::NotLinked { .. } => ErrorKind::NotLinked,
            DictError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            DictError::Graph(err) => err.kind(),
            DictError::Read { .. } | DictError::Write { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn not_found(word: &str) -> Self {
        DictError::NotFound {
            word: word.to_string(),
        }
    }
}
