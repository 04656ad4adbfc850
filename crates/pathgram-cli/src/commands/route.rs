//! Route command handler: plan a path against a local graph file.

use std::path::Path;

use anyhow::{Context, Result};

use pathgram_lib::{load_graph, plan_route, RouteRequest};

use crate::output::{render_route, OutputFormat};

/// Handle the route subcommand.
pub fn handle_route(graph_path: &Path, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;

    let plan = plan_route(&graph, &RouteRequest::new(from, to))?;
    tracing::debug!(hops = plan.hop_count(), weight = plan.total_weight, "route planned");

    print!("{}", render_route(&plan, format));
    Ok(())
}
