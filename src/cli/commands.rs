//! CLI command implementations.

use std::path::Path;

use crate::config::{load_config, resolve_config_path, GraphConfig};
use crate::format::{
    render_adjacency_list, render_adjacency_matrix, render_order, GraphSnapshot, TraversalReport,
};
use crate::graph::{LabeledGraph, TraversalOrder};
use crate::types::GraphResult;

/// Load the graph to operate on.
///
/// Uses the resolved definition file if there is one, otherwise the campus
/// demo. `directed` overrides the definition's flag when set.
pub fn load_graph(explicit: Option<&Path>, directed: Option<bool>) -> GraphResult<LabeledGraph> {
    let mut config = match resolve_config_path(explicit) {
        Some(path) => load_config(&path)?,
        None => {
            log::debug!("No graph file given, using the campus demo");
            GraphConfig::campus(false)
        }
    };
    if let Some(directed) = directed {
        config.directed = directed;
    }
    config.build()
}

/// Display a summary of the graph.
pub fn cmd_info(graph: &LabeledGraph, json: bool) -> GraphResult<()> {
    let vertices: Vec<&str> = graph.vertex_names().collect();

    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edge_entries": graph.edge_count(),
            "directed": graph.is_directed(),
            "names": vertices,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edge entries: {}", graph.edge_count());
        println!(
            "Kind: {}",
            if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            }
        );
        println!("Names: {}", vertices.join(", "));
    }
    Ok(())
}

/// Print both representations.
pub fn cmd_show(graph: &LabeledGraph, json: bool) -> GraphResult<()> {
    if json {
        let snapshot = GraphSnapshot::capture(graph);
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).unwrap_or_default()
        );
    } else {
        print!("{}", render_adjacency_list(graph));
        println!();
        print!("{}", render_adjacency_matrix(graph));
    }
    Ok(())
}

/// List the outgoing edges of one vertex.
pub fn cmd_neighbors(graph: &LabeledGraph, vertex: &str, json: bool) -> GraphResult<()> {
    let edges = graph.neighbors(vertex)?;

    if json {
        let entries: Vec<serde_json::Value> = edges
            .iter()
            .map(|e| {
                serde_json::json!({
                    "to": graph.vertex_name(e.destination),
                    "weight": e.weight,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "neighbors": entries})
        );
    } else if edges.is_empty() {
        println!("{} has no neighbors", vertex);
    } else {
        println!("Neighbors of {}:", vertex);
        for edge in edges {
            println!(
                "  {} (w: {:?})",
                graph.vertex_name(edge.destination).unwrap_or("?"),
                edge.weight
            );
        }
    }
    Ok(())
}

/// Run a traversal and print the visiting order.
pub fn cmd_traverse(
    graph: &LabeledGraph,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let report = TraversalReport::run(graph, start, order);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else if report.visited.is_empty() {
        println!("{} from {:?}: no vertices visited", order, start);
    } else {
        println!("{} from {}:", order, start);
        println!("  {}", render_order(&report.visited));
    }
    Ok(())
}
