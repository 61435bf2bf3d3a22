//! graphwalk — labeled graphs with BFS/DFS traversal.
//!
//! A graph is built once over a fixed set of named vertices, then edges are
//! added one at a time. Each edge is kept in both an adjacency list and an
//! adjacency matrix, and the two always agree.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, parse_config, EdgeConfig, GraphConfig};
pub use format::{render_adjacency_list, render_adjacency_matrix, GraphSnapshot, TraversalReport};
pub use graph::{bfs_order, dfs_order, GraphBuilder, LabeledGraph, TraversalOrder};
pub use types::{is_edge, Edge, GraphError, GraphResult, DEFAULT_WEIGHT, NO_EDGE};
