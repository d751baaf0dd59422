//! Graph validation logic.

use sd_core::check_vertex_name;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Adjacency, Graph};

fn check_name(word: &str) -> GraphResult<()> {
    check_vertex_name(word).map_err(|reason| GraphError::invalid_vertex(word, reason))
}

/// Validate a decoded adjacency listing before it becomes a graph.
///
/// Checks names, self-loops, that every neighbor is a vertex, and symmetry.
pub(crate) fn validate_adjacency(adjacency: &Adjacency) -> GraphResult<()> {
    for (vertex, neighbors) in adjacency {
        check_name(vertex)?;

        for neighbor in neighbors {
            if neighbor == vertex {
                return Err(GraphError::SelfLoop {
                    word: vertex.clone(),
                });
            }

            check_name(neighbor)?;

            let Some(back) = adjacency.get(neighbor) else {
                return Err(GraphError::DanglingReference {
                    word: neighbor.clone(),
                    from: vertex.clone(),
                });
            };

            if !back.contains(vertex) {
                return Err(GraphError::AsymmetricEdge {
                    from: vertex.clone(),
                    to: neighbor.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validate a handle graph against the same rules.
pub(crate) fn validate_graph(graph: &Graph) -> GraphResult<()> {
    for (id, vertex) in graph.iter() {
        check_name(&vertex.word)?;

        for &neighbor in &vertex.neighbors {
            if neighbor == id {
                return Err(GraphError::SelfLoop {
                    word: vertex.word.clone(),
                });
            }

            let Some(other) = graph.vertex(neighbor) else {
                return Err(GraphError::DanglingReference {
                    word: format!("#{neighbor}"),
                    from: vertex.word.clone(),
                });
            };

            if !other.neighbors.contains(&id) {
                return Err(GraphError::AsymmetricEdge {
                    from: vertex.word.clone(),
                    to: other.word.clone(),
                });
            }
        }
    }

    Ok(())
}
