use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the pathgram library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph source file could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphNotFound { path: PathBuf },

    /// Raised when a line of the edge list does not match `source target weight`.
    #[error("invalid edge on line {line}: {reason}")]
    InvalidEdgeLine { line: usize, reason: String },

    /// Raised when an edge carries a negative weight, which Dijkstra cannot handle.
    #[error("negative weight {weight} on edge {source_node} -> {target_node}")]
    NegativeWeight {
        source_node: String,
        target_node: String,
        weight: i64,
    },

    /// Raised when a node label is not present in the graph.
    #[error("unknown node: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no path connects the two nodes.
    #[error("no path found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short machine-friendly label, used for metrics and structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::GraphNotFound { .. } => "graph_not_found",
            Error::InvalidEdgeLine { .. } => "invalid_edge",
            Error::NegativeWeight { .. } => "negative_weight",
            Error::UnknownNode { .. } => "unknown_node",
            Error::RouteNotFound { .. } => "no_path",
            Error::Io(_) => "io",
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
