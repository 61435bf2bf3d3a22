//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod labeled_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use labeled_graph::LabeledGraph;
pub use traversal::{bfs_order, dfs_order, TraversalOrder};
