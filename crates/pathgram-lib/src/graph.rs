use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Non-negative edge weight as stored in the graph.
pub type Weight = u64;

/// Dense index assigned to a node in order of first appearance.
pub type NodeId = usize;

/// Similarity floor used when suggesting alternatives for an unknown label.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Opaque node label. Equality and hashing are by label value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Node> for String {
    fn from(value: Node) -> Self {
        value.0
    }
}

/// Outgoing edge within the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

#[derive(Debug, Default)]
struct GraphInner {
    nodes: Vec<Node>,
    index: HashMap<Node, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

/// Append-only graph under construction.
///
/// Nodes are created the first time they appear as an edge endpoint. Parallel
/// edges between the same ordered pair are all kept, in insertion order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: GraphInner,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directed edge. Negative weights are rejected.
    pub fn add_edge(
        &mut self,
        source: impl Into<Node>,
        target: impl Into<Node>,
        weight: i64,
    ) -> Result<()> {
        let source = source.into();
        let target = target.into();

        let weight = Weight::try_from(weight).map_err(|_| Error::NegativeWeight {
            source_node: source.to_string(),
            target_node: target.to_string(),
            weight,
        })?;

        let from = self.intern(source);
        let to = self.intern(target);
        self.inner.adjacency[from].push(Edge { target: to, weight });
        self.inner.edge_count += 1;
        Ok(())
    }

    fn intern(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.inner.index.get(&node) {
            return id;
        }
        let id = self.inner.nodes.len();
        self.inner.nodes.push(node.clone());
        self.inner.index.insert(node, id);
        self.inner.adjacency.push(Vec::new());
        id
    }

    /// Freeze the builder into an immutable, shareable graph.
    pub fn build(self) -> Graph {
        Graph {
            inner: Arc::new(self.inner),
        }
    }
}

/// Immutable weighted digraph used by pathfinding algorithms.
///
/// Cloning is cheap; all clones share the same adjacency.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

impl Graph {
    /// Look up the dense identifier for a label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.inner.index.get(label).copied()
    }

    /// Label for a dense identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.nodes.get(id)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.inner.index.contains_key(label)
    }

    /// All nodes in order of first appearance.
    pub fn nodes(&self) -> &[Node] {
        &self.inner.nodes
    }

    pub fn node_count(&self) -> usize {
        self.inner.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count
    }

    /// Outgoing edges of `id`, in insertion order.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.inner
            .adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return the `(target, weight)` pairs leaving `label`.
    ///
    /// Unknown labels and sink nodes both yield an empty iterator.
    pub fn neighbours<'a>(&'a self, label: &str) -> impl Iterator<Item = (&'a Node, Weight)> + 'a {
        let edges = self.node_id(label).map(|id| self.edges(id)).unwrap_or(&[]);
        edges
            .iter()
            .map(move |edge| (&self.inner.nodes[edge.target], edge.weight))
    }

    /// Find labels similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &Node)> = self
            .inner
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.as_str().to_lowercase());
                (score, node)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, node)| node.to_string())
            .collect()
    }
}
