//! Integration tests for sd-graph.

use sd_core::ErrorKind;
use sd_graph::codec::{binary, condensed, csv};
use sd_graph::{Graph, GraphError};

fn thesaurus() -> Graph {
    // big - large - huge, tiny - small, alone
    let mut graph = Graph::new();
    graph.add_edge("big", "large").unwrap();
    graph.add_edge("large", "huge").unwrap();
    graph.add_edge("tiny", "small").unwrap();
    graph.add_vertex("alone").unwrap();
    graph
}

#[test]
fn chain_is_connected_but_not_direct() {
    let graph = thesaurus();

    assert!(graph.has_edge("big", "large"));
    assert!(!graph.has_edge("big", "huge"));
    assert!(graph.are_connected("big", "huge"));
    assert_eq!(graph.neighbors("large"), vec!["big", "huge"]);
    assert_eq!(graph.connected_vertices("big"), vec!["huge", "large"]);
}

#[test]
fn groups_match_connected_vertices() {
    let graph = thesaurus();
    let groups = graph.connectivity_groups();

    for vertex in graph.vertices() {
        let containing: Vec<&Vec<String>> = groups.iter().filter(|g| g.contains(&vertex)).collect();
        assert_eq!(containing.len(), 1);

        let mut expected = graph.connected_vertices(&vertex);
        expected.push(vertex.clone());
        expected.sort();
        assert_eq!(containing[0], &expected);
    }
}

#[test]
fn every_codec_round_trips() {
    let graph = thesaurus();

    assert_eq!(binary::decode(&binary::encode(&graph).unwrap()).unwrap(), graph);
    assert_eq!(csv::decode(&csv::encode(&graph)).unwrap(), graph);
    assert_eq!(condensed::decode(&condensed::encode(&graph)).unwrap(), graph);
}

#[test]
fn codecs_agree_with_each_other() {
    let graph = thesaurus();
    let from_csv = csv::decode(&csv::encode(&graph)).unwrap();
    let from_condensed = condensed::decode(&condensed::encode(&from_csv)).unwrap();
    let from_binary = binary::decode(&binary::encode(&from_condensed).unwrap()).unwrap();
    assert_eq!(from_binary, graph);
}

#[test]
fn decode_errors_carry_kinds() {
    let cases: [(&[u8], ErrorKind); 5] = [
        (b"a;b\nb;a\na\n", ErrorKind::DuplicateVertex),
        (b"a;b\nb\n", ErrorKind::AsymmetricEdge),
        (b"a;a\n", ErrorKind::SelfLoop),
        (b"a;ghost\n", ErrorKind::DanglingReference),
        (b";\n", ErrorKind::InvalidVertex),
    ];
    for (input, kind) in cases {
        let err = csv::decode(input).unwrap_err();
        assert_eq!(err.kind(), kind, "input {:?}", String::from_utf8_lossy(input));
    }

    let err = condensed::decode(b"a;b;c").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedLine);
    let err = binary::decode(b"junk").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Codec);
}

#[test]
fn merge_keeps_invariants() {
    let mut left = thesaurus();
    let mut right = Graph::new();
    right.add_edge("huge", "enormous").unwrap();
    right.add_edge("tiny", "big").unwrap();
    right.add_vertex("alone").unwrap();
    right.add_vertex("new").unwrap();

    left.merge_unsafe(right);

    left.validate().unwrap();
    assert!(left.are_connected("enormous", "small"));
    assert!(left.has_vertex("new"));
    assert_eq!(left.connectivity_group_count(), 3);
}

#[test]
fn from_graph_swaps_contents() {
    let mut graph = thesaurus();
    let replacement = csv::decode(b"x;y\ny;x\n").unwrap();
    graph.from_graph_unsafe(replacement);
    assert_eq!(graph.vertices(), vec!["x", "y"]);
}

#[test]
fn large_chain() {
    let mut graph = Graph::new();
    let words: Vec<String> = (0..500).map(|i| format!("w{i:03}")).collect();
    for pair in words.windows(2) {
        graph.add_edge(&pair[0], &pair[1]).unwrap();
    }

    assert_eq!(graph.order(), 500);
    assert_eq!(graph.connected_vertex_count("w000"), 499);
    assert!(graph.are_connected("w000", "w499"));
    assert_eq!(graph.connectivity_group_count(), 1);

    graph.remove_vertex("w250");
    assert!(!graph.are_connected("w000", "w499"));
    assert_eq!(graph.connectivity_group_count(), 2);
}

#[test]
fn invalid_vertex_message_names_the_word() {
    let mut graph = Graph::new();
    let err = graph.add_vertex("semi;colon").unwrap_err();
    assert!(matches!(err, GraphError::InvalidVertex { .. }));
    assert!(err.to_string().contains("semi;colon"));
}
