use pathgram_lib::{Error, GraphBuilder, Node};

fn fixture_graph() -> pathgram_lib::Graph {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B", 1).unwrap();
    builder.add_edge("B", "C", 2).unwrap();
    builder.add_edge("A", "C", 5).unwrap();
    builder.add_edge("A", "B", 7).unwrap();
    builder.build()
}

#[test]
fn neighbours_keep_parallel_edges_in_insertion_order() {
    let graph = fixture_graph();
    let edges: Vec<_> = graph
        .neighbours("A")
        .map(|(target, weight)| (target.as_str().to_string(), weight))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("B".to_string(), 1),
            ("C".to_string(), 5),
            ("B".to_string(), 7)
        ]
    );
}

#[test]
fn sink_and_unknown_nodes_have_no_neighbours() {
    let graph = fixture_graph();
    assert_eq!(graph.neighbours("C").count(), 0, "sink node");
    assert_eq!(graph.neighbours("Z").count(), 0, "unknown node");
}

#[test]
fn node_set_is_exactly_edge_endpoints() {
    let graph = fixture_graph();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.contains("C"));
    assert!(!graph.contains("D"));
    assert_eq!(
        graph.nodes(),
        &[Node::new("A"), Node::new("B"), Node::new("C")]
    );
}

#[test]
fn negative_weight_is_rejected_without_creating_nodes() {
    let mut builder = GraphBuilder::new();
    let err = builder.add_edge("X", "Y", -3).unwrap_err();
    match err {
        Error::NegativeWeight {
            source_node,
            target_node,
            weight,
        } => {
            assert_eq!(source_node, "X");
            assert_eq!(target_node, "Y");
            assert_eq!(weight, -3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(builder.build().node_count(), 0);
}

#[test]
fn self_loops_are_stored() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "A", 4).unwrap();
    let graph = builder.build();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.neighbours("A").count(), 1);
}

#[test]
fn fuzzy_matches_rank_close_labels() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("Alpha", "Beta", 1).unwrap();
    builder.add_edge("Beta", "Gamma", 1).unwrap();
    let graph = builder.build();

    let matches = graph.fuzzy_matches("alpah", 3);
    assert_eq!(matches.first().map(String::as_str), Some("Alpha"));
    assert!(graph.fuzzy_matches("zzzzzz", 3).is_empty());
}
