//! Session state for one interactive run.
//!
//! The session owns the single live graph; every command handler receives it
//! by `&mut` so there is no global state.

use std::path::PathBuf;

use network_graph::Graph;

use crate::config::AppConfig;

/// The graph being edited plus where it is stored.
#[derive(Debug, Clone)]
pub struct Session {
    /// The live graph.
    pub graph: Graph,

    /// File used by load and save.
    pub path: PathBuf,

    /// Unit printed after weights.
    pub unit: String,
}

impl Session {
    /// Empty graph bound to the configured file.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            graph: Graph::new(),
            path: config.storage.path.clone(),
            unit: config.display.unit.clone(),
        }
    }

    /// Session over an existing graph, mostly for tests.
    pub fn with_graph(graph: Graph, path: impl Into<PathBuf>) -> Self {
        Self {
            graph,
            path: path.into(),
            unit: "km".to_string(),
        }
    }
}
