use clap::ValueEnum;
use serde::Serialize;

use pathgram_lib::RoutePlan;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    start: &'a str,
    goal: &'a str,
    hops: usize,
    total_weight: u128,
    path: Vec<&'a str>,
}

/// Render a planned route.
pub fn render_route(plan: &RoutePlan, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "Route from {} to {} ({} hops, weight {}):\n",
                plan.start,
                plan.goal,
                plan.hop_count(),
                plan.total_weight
            );
            for step in &plan.steps {
                out.push_str(&format!("- {}\n", step));
            }
            out
        }
        OutputFormat::Json => {
            let summary = RouteSummary {
                start: plan.start.as_str(),
                goal: plan.goal.as_str(),
                hops: plan.hop_count(),
                total_weight: plan.total_weight,
                path: plan.labels(),
            };
            // Serializing plain strings and integers cannot fail.
            serde_json::to_string_pretty(&summary).unwrap_or_default() + "\n"
        }
    }
}
