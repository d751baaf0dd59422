//! Binary snapshot codec.
//!
//! # Layout
//!
//! A bincode-encoded `Snapshot`: a 4-byte magic, a format version and the
//! adjacency listing as `(word, neighbors)` entries sorted by word.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Adjacency, Graph};

const MAGIC: [u8; 4] = *b"SYND";
const VERSION: u16 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    magic: [u8; 4],
    version: u16,
    entries: Vec<(String, Vec<String>)>,
}

/// Encode a graph as a binary snapshot.
pub fn encode(graph: &Graph) -> GraphResult<Vec<u8>> {
    let entries = graph
        .to_adjacency()
        .into_iter()
        .map(|(word, neighbors)| (word, neighbors.into_iter().collect()))
        .collect();
    let snapshot = Snapshot {
        magic: MAGIC,
        version: VERSION,
        entries,
    };
    bincode::serialize(&snapshot).map_err(|err| GraphError::Encode(err.to_string()))
}

/// Decode a binary snapshot and validate it.
pub fn decode(data: &[u8]) -> GraphResult<Graph> {
    if data.is_empty() {
        return Ok(Graph::new());
    }

    let snapshot: Snapshot =
        bincode::deserialize(data).map_err(|err| GraphError::Decode(err.to_string()))?;
    if snapshot.magic != MAGIC {
        return Err(GraphError::Decode("not a synonym graph snapshot".into()));
    }
    if snapshot.version != VERSION {
        return Err(GraphError::Decode(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }

    let mut adjacency = Adjacency::new();
    for (word, neighbors) in snapshot.entries {
        if adjacency.contains_key(&word) {
            return Err(GraphError::DuplicateVertex { word });
        }
        adjacency.insert(word, neighbors.into_iter().collect());
    }

    Graph::from_adjacency(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut graph = Graph::new();
        graph.add_edge("big", "large").unwrap();
        graph.add_edge("large", "huge").unwrap();
        graph.add_vertex("lonely").unwrap();

        let bytes = encode(&graph).unwrap();
        assert_eq!(decode(&bytes).unwrap(), graph);
    }

    #[test]
    fn empty_input_is_empty_graph() {
        assert!(decode(&[]).unwrap().is_empty());
        assert!(decode(&encode(&Graph::new()).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode(b"definitely not bincode").unwrap_err();
        assert!(matches!(err, GraphError::Decode(_)));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let snapshot = Snapshot {
            magic: *b"NOPE",
            version: VERSION,
            entries: vec![],
        };
        let bytes = bincode::serialize(&snapshot).unwrap();
        assert!(matches!(decode(&bytes), Err(GraphError::Decode(_))));
    }

    #[test]
    fn decoded_snapshot_is_validated() {
        let snapshot = Snapshot {
            magic: MAGIC,
            version: VERSION,
            entries: vec![("a".into(), vec!["b".into()]), ("b".into(), vec![])],
        };
        let bytes = bincode::serialize(&snapshot).unwrap();
        assert!(matches!(
            decode(&bytes),
            Err(GraphError::AsymmetricEdge { .. })
        ));
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let snapshot = Snapshot {
            magic: MAGIC,
            version: VERSION,
            entries: vec![("a".into(), vec![]), ("a".into(), vec![])],
        };
        let bytes = bincode::serialize(&snapshot).unwrap();
        assert!(matches!(
            decode(&bytes),
            Err(GraphError::DuplicateVertex { .. })
        ));
    }
}
