//! Presentation output: plain-text tables and serializable snapshots.

pub mod snapshot;
pub mod text;

pub use snapshot::{AdjacencyEntry, GraphSnapshot, TraversalReport};
pub use text::{render_adjacency_list, render_adjacency_matrix, render_order, INF_MARKER};
