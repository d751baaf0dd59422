//! Property tests for the graph invariants.

use proptest::prelude::*;
use sd_core::check_vertex_name;
use sd_graph::Graph;
use sd_graph::codec::{binary, condensed, csv};

/// Names that collide often, including ones that differ only by spaces.
const WORDS: [&str; 10] = ["a", "b", "c", " a", "a ", " ", "  ", "ä-b", "ice cream", "Ω"];

#[derive(Debug, Clone)]
enum Op {
    AddVertex(String),
    AddEdge(String, String),
    RemoveVertex(String),
    RemoveEdge(String, String),
    RemoveEdgeAndCleanup(String, String),
    Cleanup,
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(WORDS.to_vec()).prop_map(str::to_string),
        1 => "[\\p{L} \\-]{1,6}".prop_filter("valid vertex name", |name: &String| {
            check_vertex_name(name).is_ok()
        }),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => word().prop_map(Op::AddVertex),
        6 => (word(), word()).prop_map(|(a, b)| Op::AddEdge(a, b)),
        1 => word().prop_map(Op::RemoveVertex),
        1 => (word(), word()).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        1 => (word(), word()).prop_map(|(a, b)| Op::RemoveEdgeAndCleanup(a, b)),
        1 => Just(Op::Cleanup),
    ]
}

fn apply(graph: &mut Graph, op: &Op) {
    match op {
        Op::AddVertex(w) => graph.add_vertex(w).unwrap(),
        Op::AddEdge(a, b) => graph.add_edge(a, b).unwrap(),
        Op::RemoveVertex(w) => graph.remove_vertex(w),
        Op::RemoveEdge(a, b) => {
            graph.remove_edge(a, b);
        }
        Op::RemoveEdgeAndCleanup(a, b) => graph.remove_edge_and_cleanup(a, b),
        Op::Cleanup => {
            graph.cleanup();
        }
    }
}

fn graph() -> impl Strategy<Value = Graph> {
    prop::collection::vec(op(), 0..40).prop_map(|ops| {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
        }
        graph
    })
}

proptest! {
    #[test]
    fn edges_are_symmetric_without_self_loops(graph in graph()) {
        let vertices = graph.vertices();
        for a in &vertices {
            prop_assert!(!graph.has_edge(a, a));
            for b in &vertices {
                prop_assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
            }
        }
        prop_assert!(graph.validate().is_ok());
    }

    #[test]
    fn mutators_are_idempotent(mut graph in graph(), a in word(), b in word()) {
        graph.add_vertex(&a).unwrap();
        let once = graph.clone();
        graph.add_vertex(&a).unwrap();
        prop_assert_eq!(&graph, &once);

        graph.add_edge(&a, &b).unwrap();
        let once = graph.clone();
        graph.add_edge(&a, &b).unwrap();
        prop_assert_eq!(&graph, &once);
    }

    #[test]
    fn remove_vertex_cascades(mut graph in graph(), victim in word()) {
        graph.remove_vertex(&victim);
        prop_assert!(!graph.has_vertex(&victim));
        for other in graph.vertices() {
            prop_assert!(!graph.neighbors(&other).iter().any(|n| *n == victim));
        }
    }

    #[test]
    fn groups_are_consistent(graph in graph()) {
        let groups = graph.connectivity_groups();
        prop_assert_eq!(groups.len(), graph.connectivity_group_count());

        let total: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(total, graph.order());

        for vertex in graph.vertices() {
            let containing: Vec<_> = groups.iter().filter(|g| g.contains(&vertex)).collect();
            prop_assert_eq!(containing.len(), 1);

            let mut expected = graph.connected_vertices(&vertex);
            expected.push(vertex.clone());
            expected.sort();
            prop_assert_eq!(containing[0], &expected);
            prop_assert_eq!(graph.connected_vertex_count(&vertex), expected.len() - 1);
        }
    }

    #[test]
    fn codecs_round_trip(graph in graph()) {
        // Every name survives byte for byte, spaces included.
        let names = graph.vertices();
        prop_assert_eq!(csv::decode(&csv::encode(&graph)).unwrap().vertices(), names.clone());
        prop_assert_eq!(condensed::decode(&condensed::encode(&graph)).unwrap().vertices(), names);

        prop_assert_eq!(&binary::decode(&binary::encode(&graph).unwrap()).unwrap(), &graph);
        prop_assert_eq!(&csv::decode(&csv::encode(&graph)).unwrap(), &graph);
        prop_assert_eq!(&condensed::decode(&condensed::encode(&graph)).unwrap(), &graph);
    }

    #[test]
    fn merge_preserves_invariants(left in graph(), right in graph()) {
        let mut merged = left.clone();
        merged.merge_unsafe(right.clone());
        prop_assert!(merged.validate().is_ok());

        for (source, other) in [(&left, &right), (&right, &left)] {
            for vertex in source.vertices() {
                prop_assert!(merged.has_vertex(&vertex));
                for neighbor in source.neighbors(&vertex) {
                    prop_assert!(merged.has_edge(&vertex, &neighbor));
                }
            }
            prop_assert!(merged.order() >= other.order());
        }
    }
}
