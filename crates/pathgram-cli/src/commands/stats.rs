//! Stats command handler: validate a graph file and report its size.

use std::path::Path;

use anyhow::{Context, Result};

use pathgram_lib::load_graph;

/// Handle the stats subcommand.
pub fn handle_stats(graph_path: &Path) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;

    let sinks = (0..graph.node_count())
        .filter(|&id| graph.edges(id).is_empty())
        .count();

    println!("nodes: {}", graph.node_count());
    println!("edges: {}", graph.edge_count());
    println!("sinks: {}", sinks);
    Ok(())
}
