//! sd-dict: personal synonym dictionary on top of sd-graph.
//!
//! Adds the word pattern, batch error collection, synonym chaining and the
//! import/export format table.
//!
//! # Example
//!
//! ```
//! use sd_dict::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! assert!(dict.add_synonyms(&["big", "large", "huge"]).is_empty());
//!
//! assert!(dict.are_synonyms("big", "huge").unwrap());
//! assert!(!dict.are_direct_synonyms("big", "huge").unwrap());
//! assert_eq!(dict.direct_synonyms("large").unwrap(), vec!["big", "huge"]);
//! ```

pub mod dictionary;
pub mod error;
pub mod format;
pub mod storage;
pub mod word;

pub use dictionary::{DictOptions, Dictionary, ImportMode};
pub use error::{DictError, DictResult};
pub use format::Format;
pub use word::is_valid_word;
