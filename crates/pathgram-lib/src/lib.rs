//! Pathgram library entry points.
//!
//! This crate loads a weighted, directed edge list into an immutable in-memory
//! graph and answers shortest-path queries over it. Higher-level consumers
//! (the UDP service, the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeId, Weight};
pub use loader::{load_graph, load_graph_from_reader, parse_edge_line, EdgeEntry};
pub use path::{find_route_dijkstra, Distance, PathResult};
pub use routing::{plan_route, RoutePlan, RouteRequest};
