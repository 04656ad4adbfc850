use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId};

/// Cumulative path weight. Edge weights fit in `i64`, so sums over any
/// realistic edge count cannot overflow.
pub type Distance = u128;

/// Node sequence and total weight of a found path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub steps: Vec<NodeId>,
    pub cost: Distance,
}

/// Run Dijkstra's algorithm from `start` to `goal`.
///
/// Equal-distance frontier entries are settled in the order they were pushed,
/// and a predecessor is only replaced by a strictly cheaper one, so the route
/// reached through the earliest-inserted edge wins ties. Returns `None` when
/// `goal` is unreachable.
pub fn find_route_dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> Option<PathResult> {
    if start == goal {
        return Some(PathResult {
            steps: vec![start],
            cost: 0,
        });
    }

    let node_count = graph.node_count();
    if start >= node_count || goal >= node_count {
        return None;
    }

    let mut distances: Vec<Option<Distance>> = vec![None; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0, sequence));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;

        if entry.node == goal {
            return Some(PathResult {
                steps: reconstruct_path(&parents, start, goal),
                cost: entry.cost,
            });
        }

        for edge in graph.edges(entry.node) {
            let next = edge.target;
            if settled[next] {
                continue;
            }

            let next_cost = entry.cost + Distance::from(edge.weight);
            let improves = distances[next].map_or(true, |known| next_cost < known);
            if improves {
                distances[next] = Some(next_cost);
                parents[next] = Some(entry.node);
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    None
}

fn reconstruct_path(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: Distance,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: NodeId, cost: Distance, sequence: u64) -> Self {
        Self {
            node,
            cost,
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then FIFO.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
