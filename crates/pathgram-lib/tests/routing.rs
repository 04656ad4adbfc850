use pathgram_lib::{plan_route, Error, Graph, GraphBuilder, RouteRequest};

fn graph_from(edges: &[(&str, &str, i64)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for &(source, target, weight) in edges {
        builder.add_edge(source, target, weight).unwrap();
    }
    builder.build()
}

#[test]
fn prefers_cheaper_indirect_route() {
    let graph = graph_from(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]);
    let plan = plan_route(&graph, &RouteRequest::new("A", "C")).expect("route exists");

    assert_eq!(plan.labels(), vec!["A", "B", "C"]);
    assert_eq!(plan.total_weight, 3);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn same_origin_and_destination_is_single_node() {
    let graph = graph_from(&[("A", "B", 1)]);
    for label in ["A", "B"] {
        let plan = plan_route(&graph, &RouteRequest::new(label, label)).expect("trivial route");
        assert_eq!(plan.labels(), vec![label]);
        assert_eq!(plan.total_weight, 0);
        assert_eq!(plan.hop_count(), 0);
    }
}

#[test]
fn edges_are_directed() {
    let graph = graph_from(&[("A", "B", 1)]);
    let error = plan_route(&graph, &RouteRequest::new("B", "A")).expect_err("no reverse edge");
    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert_eq!(format!("{error}"), "no path found between B and A");
}

#[test]
fn unknown_origin_is_reported() {
    let graph = graph_from(&[("A", "B", 1)]);
    let error = plan_route(&graph, &RouteRequest::new("X", "A")).expect_err("unknown origin");
    match error {
        Error::UnknownNode { ref name, .. } => assert_eq!(name, "X"),
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("unknown node: X"));
}

#[test]
fn unknown_destination_is_reported() {
    let graph = graph_from(&[("A", "B", 1)]);
    let error = plan_route(&graph, &RouteRequest::new("A", "Q")).expect_err("unknown goal");
    assert!(matches!(error, Error::UnknownNode { ref name, .. } if name == "Q"));
}

#[test]
fn unknown_node_suggests_close_labels() {
    let graph = graph_from(&[("Brana", "Nod", 1)]);
    let error = plan_route(&graph, &RouteRequest::new("Brama", "Nod")).expect_err("typo");
    assert!(error.to_string().contains("Did you mean 'Brana'?"));
}

#[test]
fn disconnected_components_have_no_path() {
    let graph = graph_from(&[("A", "B", 1), ("C", "D", 1)]);
    let error = plan_route(&graph, &RouteRequest::new("A", "D")).expect_err("disconnected");
    assert!(matches!(error, Error::RouteNotFound { .. }));
}

#[test]
fn repeated_queries_are_identical() {
    let graph = graph_from(&[
        ("S", "A", 2),
        ("S", "B", 1),
        ("A", "T", 1),
        ("B", "C", 1),
        ("C", "T", 1),
        ("S", "T", 3),
    ]);
    let request = RouteRequest::new("S", "T");
    let first = plan_route(&graph, &request).expect("route exists");
    for _ in 0..10 {
        assert_eq!(plan_route(&graph, &request).expect("route exists"), first);
    }
    assert_eq!(first.total_weight, 3);
    assert_eq!(first.labels(), vec!["S", "T"], "direct edge was discovered first");
}

#[test]
fn graph_is_shared_across_threads() {
    let graph = graph_from(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            std::thread::spawn(move || plan_route(&graph, &RouteRequest::new("A", "C")))
        })
        .collect();

    for handle in handles {
        let plan = handle.join().expect("thread").expect("route exists");
        assert_eq!(plan.total_weight, 3);
    }
}

#[test]
fn huge_weights_do_not_collapse_distinct_totals() {
    let max = i64::MAX;
    let graph = graph_from(&[
        ("A", "P", max),
        ("P", "Q", max),
        ("Q", "D", max),
        ("A", "X", max),
        ("X", "Y", max),
        ("Y", "D", max - 1),
    ]);
    let plan = plan_route(&graph, &RouteRequest::new("A", "D")).expect("route exists");
    assert_eq!(plan.labels(), vec!["A", "X", "Y", "D"]);
    assert_eq!(plan.total_weight, 3 * max as u128 - 1);
}
