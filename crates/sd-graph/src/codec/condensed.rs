//! Condensed edge-list CSV codec.
//!
//! One line per isolated vertex (`vertex`) or per edge (`a;b`). Each edge is
//! written once, with the lexicographically smaller name first.

use sd_core::SEPARATOR;

use crate::codec::text_lines;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Encode isolated vertices and edges, sorted.
pub fn encode(graph: &Graph) -> Vec<u8> {
    let mut out = String::new();
    for (vertex, neighbors) in graph.to_adjacency() {
        if neighbors.is_empty() {
            out.push_str(&vertex);
            out.push('\n');
            continue;
        }
        for neighbor in neighbors.iter().filter(|n| **n > vertex) {
            out.push_str(&vertex);
            out.push(SEPARATOR);
            out.push_str(neighbor);
            out.push('\n');
        }
    }
    out.into_bytes()
}

/// Decode by replaying lines through the validating mutators.
pub fn decode(data: &[u8]) -> GraphResult<Graph> {
    let mut graph = Graph::new();

    for line in text_lines(data)? {
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        match fields.as_slice() {
            [vertex] => graph.add_vertex(vertex)?,
            [a, b] => graph.add_edge(a, b)?,
            _ => {
                return Err(GraphError::MalformedLine {
                    line: line.clone(),
                    fields: fields.len(),
                });
            }
        }
    }

    Ok(graph)
}
