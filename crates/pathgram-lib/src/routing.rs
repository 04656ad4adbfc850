//! Route planning facade over the graph and the shortest-path search.
//!
//! [`plan_route`] resolves node labels, runs Dijkstra, and maps the outcome to
//! the library's error taxonomy:
//!
//! - an unknown origin or destination yields [`Error::UnknownNode`]
//! - an unreachable destination yields [`Error::RouteNotFound`]
//! - `origin == destination` yields a single-node plan of weight zero
//!
//! # Example
//!
//! ```
//! use pathgram_lib::{plan_route, GraphBuilder, RouteRequest};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B", 1)?;
//! builder.add_edge("B", "C", 2)?;
//! builder.add_edge("A", "C", 5)?;
//! let graph = builder.build();
//!
//! let plan = plan_route(&graph, &RouteRequest::new("A", "C"))?;
//! assert_eq!(plan.labels(), vec!["A", "B", "C"]);
//! assert_eq!(plan.total_weight, 3);
//! # Ok::<(), pathgram_lib::Error>(())
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node, NodeId};
use crate::path::{find_route_dijkstra, Distance};

/// Number of alternative labels offered when a node is unknown.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: Node,
    pub goal: Node,
    pub steps: Vec<Node>,
    pub total_weight: Distance,
}

impl RoutePlan {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Step labels as plain strings, origin first.
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(Node::as_str).collect()
    }
}

fn resolve_node(graph: &Graph, name: &str) -> Result<NodeId> {
    graph.node_id(name).ok_or_else(|| Error::UnknownNode {
        name: name.to_string(),
        suggestions: graph.fuzzy_matches(name, MAX_SUGGESTIONS),
    })
}

/// Compute the minimum-weight route described by `request`.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_node(graph, &request.start)?;
    let goal = resolve_node(graph, &request.goal)?;

    let found = find_route_dijkstra(graph, start, goal).ok_or_else(|| Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    })?;

    let steps = found
        .steps
        .iter()
        .filter_map(|&id| graph.node(id).cloned())
        .collect();

    Ok(RoutePlan {
        start: Node::new(request.start.as_str()),
        goal: Node::new(request.goal.as_str()),
        steps,
        total_weight: found.cost,
    })
}
