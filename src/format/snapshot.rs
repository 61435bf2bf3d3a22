//! Serializable views of a graph for JSON consumers.

use serde::Serialize;

use crate::graph::{LabeledGraph, TraversalOrder};
use crate::types::is_edge;

/// One outgoing edge, by vertex name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry {
    pub to: String,
    pub weight: f64,
}

/// Read-only copy of both representations with names resolved.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    /// Vertex names in index order.
    pub vertices: Vec<String>,
    /// Outgoing edges, parallel to `vertices`.
    pub adjacency: Vec<Vec<AdjacencyEntry>>,
    /// Weight matrix; `None` (JSON `null`) where there is no edge.
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl GraphSnapshot {
    /// Capture the current state of a graph.
    pub fn capture(graph: &LabeledGraph) -> Self {
        let vertices: Vec<String> = graph.vertex_names().map(str::to_string).collect();

        let adjacency = (0..graph.vertex_count())
            .map(|idx| {
                graph
                    .neighbors_of(idx)
                    .unwrap_or(&[])
                    .iter()
                    .map(|edge| AdjacencyEntry {
                        to: vertices[edge.destination].clone(),
                        weight: edge.weight,
                    })
                    .collect()
            })
            .collect();

        let matrix = graph
            .adjacency_matrix()
            .iter()
            .map(|row| row.iter().map(|&c| is_edge(c).then_some(c)).collect())
            .collect();

        Self {
            directed: graph.is_directed(),
            vertices,
            adjacency,
            matrix,
        }
    }
}

/// Result of a single traversal, as reported by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub order: &'static str,
    pub start: String,
    pub visited: Vec<String>,
}

impl TraversalReport {
    /// Run `order` on `graph` from `start` and record the result.
    pub fn run(graph: &LabeledGraph, start: &str, order: TraversalOrder) -> Self {
        Self {
            order: order.name(),
            start: start.to_string(),
            visited: graph.traverse(start, order),
        }
    }
}
