//! Application state shared by every request handler.

use std::path::Path;

use pathgram_lib::{load_graph, Error as LibError, Graph};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Graph file not found.
    GraphNotFound(String),

    /// Failed to read or parse the graph file.
    GraphLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphNotFound(path) => write!(f, "graph file not found: {}", path),
            Self::GraphLoad(e) => write!(f, "failed to load graph: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GraphLoad(e) => Some(e),
            Self::GraphNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::GraphNotFound { path } => Self::GraphNotFound(path.display().to_string()),
            other => Self::GraphLoad(other),
        }
    }
}

/// Shared application state.
///
/// Cloning is cheap: [`Graph`] already keeps its storage behind an `Arc`, and
/// it is never mutated after loading, so workers read it without locking.
#[derive(Clone)]
pub struct AppState {
    graph: Graph,
}

impl AppState {
    /// Load application state from an edge-list file.
    ///
    /// The loader logs the node and edge counts once the file is parsed.
    pub fn load(graph_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let graph_path = graph_path.as_ref();

        tracing::debug!(path = %graph_path.display(), "loading graph");
        let graph = load_graph(graph_path)?;

        Ok(Self::from_graph(graph))
    }

    /// Create application state from an already built graph.
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Access the loaded graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.graph.node_count())
            .field("edge_count", &self.graph.edge_count())
            .finish()
    }
}
