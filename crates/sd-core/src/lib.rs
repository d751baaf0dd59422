//! sd-core: stable foundation for synodict.
//!
//! Contains:
//! - ids (compact vertex handles for the graph layer)
//! - error (the error-kind taxonomy shared by every layer)
//! - name (vertex-name rules shared by the graph codecs)

pub mod error;
pub mod ids;
pub mod name;

pub use error::ErrorKind;
pub use ids::*;
pub use name::{NameViolation, SEPARATOR, check_vertex_name};
