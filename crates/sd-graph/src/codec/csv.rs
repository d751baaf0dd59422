//! Full adjacency CSV codec: `vertex;neighbor1;neighbor2;...` per line.

use sd_core::SEPARATOR;

use crate::codec::text_lines;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Adjacency, Graph};

/// Encode one line per vertex, sorted by vertex then neighbor.
pub fn encode(graph: &Graph) -> Vec<u8> {
    let mut out = String::new();
    for (vertex, neighbors) in graph.to_adjacency() {
        out.push_str(&vertex);
        for neighbor in neighbors {
            out.push(SEPARATOR);
            out.push_str(&neighbor);
        }
        out.push('\n');
    }
    out.into_bytes()
}

/// Decode an adjacency listing and validate it.
///
/// A vertex heading two lines fails with `DuplicateVertex`.
pub fn decode(data: &[u8]) -> GraphResult<Graph> {
    let mut adjacency = Adjacency::new();

    for line in text_lines(data)? {
        let mut fields = line.split(SEPARATOR);
        let vertex = fields.next().unwrap_or_default().to_string();
        if adjacency.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex { word: vertex });
        }
        let neighbors = fields.map(str::to_string).collect();
        adjacency.insert(vertex, neighbors);
    }

    Graph::from_adjacency(adjacency)
}
