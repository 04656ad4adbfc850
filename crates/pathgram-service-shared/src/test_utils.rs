//! Test utilities for dispatcher and transport testing.
//!
//! The fixture graph is `A B 1`, `B C 2`, `A C 5`: the cheapest A→C path is
//! the indirect one, and nothing leads back to `A`.

use pathgram_lib::{Graph, GraphBuilder};

use crate::dispatcher::QueryDispatcher;
use crate::state::AppState;

/// Edge list matching [`fixture_graph`], in loader format.
pub const FIXTURE_EDGES: &str = "A B 1\nB C 2\nA C 5\n";

/// Build the three-node fixture graph.
pub fn fixture_graph() -> Graph {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B", 1).expect("fixture weight");
    builder.add_edge("B", "C", 2).expect("fixture weight");
    builder.add_edge("A", "C", 5).expect("fixture weight");
    builder.build()
}

/// Application state wrapping the fixture graph.
pub fn test_state() -> AppState {
    AppState::from_graph(fixture_graph())
}

/// Dispatcher over the fixture graph.
pub fn test_dispatcher() -> QueryDispatcher {
    QueryDispatcher::new(test_state())
}

/// Serialize a request the way a client would.
pub fn request_bytes(ori: &str, dest: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "ori": ori, "dest": dest }))
        .expect("serialize request")
}
