use core::fmt;

/// Classification shared by the graph and dictionary error types.
///
/// Each layer keeps its own error enum with context; `kind()` on those enums
/// maps them onto this taxonomy so callers can branch without matching on
/// layer-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty name, reserved separator, or word pattern mismatch.
    InvalidVertex,
    /// Word absent where existence is required.
    NotFound,
    /// Word present where absence is required.
    AlreadyExists,
    /// Words are already directly linked.
    AlreadyLinked,
    /// Words are not directly linked.
    NotLinked,
    /// The same vertex line appears twice in an adjacency listing.
    DuplicateVertex,
    /// A line has the wrong number of fields.
    MalformedLine,
    /// An edge is listed in one direction only.
    AsymmetricEdge,
    /// A vertex lists itself as a neighbor.
    SelfLoop,
    /// A neighbor is not itself a vertex.
    DanglingReference,
    /// The payload could not be encoded or decoded at all.
    Codec,
    /// Unknown format name.
    UnsupportedFormat,
    /// File access failed.
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidVertex => "invalid vertex",
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::AlreadyLinked => "already linked",
            ErrorKind::NotLinked => "not linked",
            ErrorKind::DuplicateVertex => "duplicate vertex",
            ErrorKind::MalformedLine => "malformed line",
            ErrorKind::AsymmetricEdge => "asymmetric edge",
            ErrorKind::SelfLoop => "self-loop",
            ErrorKind::DanglingReference => "dangling reference",
            ErrorKind::Codec => "codec failure",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::Io => "i/o failure",
        }
    }

    /// True for failures raised while validating decoded data.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            ErrorKind::DuplicateVertex
                | ErrorKind::MalformedLine
                | ErrorKind::AsymmetricEdge
                | ErrorKind::SelfLoop
                | ErrorKind::DanglingReference
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
