//! Graph definition loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::graph::{GraphBuilder, LabeledGraph};
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// Environment variable naming a graph definition file.
pub const GRAPH_ENV_VAR: &str = "GWALK_GRAPH";

/// A graph definition as written in a TOML file.
///
/// ```toml
/// directed = false
/// vertices = ["A", "B", "C"]
///
/// [[edges]]
/// from = "A"
/// to = "B"
/// weight = 2.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are one-way.
    #[serde(default)]
    pub directed: bool,
    /// Vertex names, in index order.
    pub vertices: Vec<String>,
    /// Edges, inserted in the order listed.
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

/// A single edge in a graph definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl GraphConfig {
    /// Construct the described graph.
    pub fn build(&self) -> GraphResult<LabeledGraph> {
        let mut builder = GraphBuilder::new(self.directed);
        builder.vertices(self.vertices.iter().cloned());
        for edge in &self.edges {
            builder.edge(edge.from.clone(), edge.to.clone(), edge.weight);
        }
        builder.build()
    }
}

/// Parse a graph definition from TOML text.
pub fn parse_config(text: &str) -> GraphResult<GraphConfig> {
    toml::from_str(text).map_err(|e| GraphError::Config(format!("Failed to parse graph: {e}")))
}

/// Load a graph definition from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<GraphConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read graph file {}: {e}", path.display()),
        ))
    })?;
    log::debug!("Loaded graph definition from {}", path.display());
    parse_config(&content)
}

/// Resolve the graph definition path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. GWALK_GRAPH environment variable
/// 3. None (caller falls back to the built-in demo)
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    match std::env::var(GRAPH_ENV_VAR) {
        Ok(env_path) if !env_path.trim().is_empty() => Some(PathBuf::from(env_path)),
        _ => None,
    }
}
