//! Plain-text rendering of the adjacency list and matrix.

use std::fmt::Write;

use crate::graph::LabeledGraph;
use crate::types::is_edge;

/// Printed in matrix cells that hold no edge.
pub const INF_MARKER: &str = "INF";

const CELL_WIDTH: usize = 8;

/// Render the adjacency list, one vertex per line in index order.
pub fn render_adjacency_list(graph: &LabeledGraph) -> String {
    let mut out = String::from("--- Adjacency List ---\n");

    for (idx, name) in graph.vertex_names().enumerate() {
        let _ = write!(out, "{} -> ", name);
        let edges = graph.neighbors_of(idx).unwrap_or(&[]);
        if edges.is_empty() {
            out.push_str("[No Neighbors]");
        }
        for edge in edges {
            let dest = graph.vertex_name(edge.destination).unwrap_or("?");
            let _ = write!(out, "{}({:?}) ", dest, edge.weight);
        }
        out.push('\n');
    }

    out
}

/// Render the weight matrix as a fixed-width table.
pub fn render_adjacency_matrix(graph: &LabeledGraph) -> String {
    let mut out = String::from("--- Adjacency Matrix ---\n");

    out.push_str(&" ".repeat(CELL_WIDTH));
    for name in graph.vertex_names() {
        let _ = write!(out, "{:>w$}", name, w = CELL_WIDTH);
    }
    out.push('\n');

    for (name, row) in graph.vertex_names().zip(graph.adjacency_matrix()) {
        let _ = write!(out, "{:<w$}", name, w = CELL_WIDTH);
        for &cell in row {
            if is_edge(cell) {
                let _ = write!(out, "{:>w$.1}", cell, w = CELL_WIDTH);
            } else {
                let _ = write!(out, "{:>w$}", INF_MARKER, w = CELL_WIDTH);
            }
        }
        out.push('\n');
    }

    out
}

/// Render a traversal order as `A -> B -> C`.
pub fn render_order(order: &[String]) -> String {
    order.join(" -> ")
}
