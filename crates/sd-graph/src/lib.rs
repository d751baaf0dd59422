//! sd-graph: undirected word graph for synodict.
//!
//! Provides:
//! - Handle-backed graph with string-keyed mutators and queries
//! - Breadth-first connectivity queries and component partitioning
//! - Structural validation, merge and replace
//! - Binary, full-adjacency CSV and condensed edge CSV codecs
//!
//! # Example
//!
//! ```
//! use sd_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("big", "large").unwrap();
//! graph.add_edge("large", "huge").unwrap();
//!
//! assert!(graph.are_connected("big", "huge"));
//! assert!(!graph.has_edge("big", "huge"));
//! assert_eq!(graph.connectivity_groups().len(), 1);
//! ```

pub mod codec;
pub mod error;
pub mod graph;
pub mod traverse;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Adjacency, Graph};
