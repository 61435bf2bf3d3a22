//! Phase 3 tests: rendering, snapshots, graph definitions, and CLI commands.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use graphwalk::cli::commands;
use graphwalk::config::{load_config, parse_config, resolve_config_path, GraphConfig};
use graphwalk::format::{
    render_adjacency_list, render_adjacency_matrix, render_order, GraphSnapshot, TraversalReport,
};
use graphwalk::graph::{LabeledGraph, TraversalOrder};
use graphwalk::types::GraphError;

const TRIANGLE: &str = r#"
directed = true
vertices = ["A", "B", "C"]

[[edges]]
from = "A"
to = "B"
weight = 2.0

[[edges]]
from = "B"
to = "C"
"#;

fn small_graph() -> LabeledGraph {
    let mut graph = LabeledGraph::new(["A", "B", "C"], true).unwrap();
    graph.add_edge("A", "B", 2.0).unwrap();
    graph.add_edge("A", "C", 0.5).unwrap();
    graph
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Text rendering ====================

#[test]
fn test_render_adjacency_list() {
    let text = render_adjacency_list(&small_graph());
    let expected = "--- Adjacency List ---\n\
                    A -> B(2.0) C(0.5) \n\
                    B -> [No Neighbors]\n\
                    C -> [No Neighbors]\n";
    assert_eq!(text, expected);
}

#[test]
fn test_render_adjacency_list_keeps_exact_weights() {
    let mut graph = LabeledGraph::new(["A", "B"], false).unwrap();
    graph.add_edge("A", "B", 2.25).unwrap();

    let text = render_adjacency_list(&graph);
    assert!(text.contains("A -> B(2.25) \n"), "got: {}", text);
    assert!(text.contains("B -> A(2.25) \n"), "got: {}", text);

    // The matrix keeps one decimal.
    let matrix = render_adjacency_matrix(&graph);
    assert!(!matrix.contains("2.25"));
}

#[test]
fn test_render_adjacency_matrix_marks_missing_edges() {
    let text = render_adjacency_matrix(&small_graph());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "--- Adjacency Matrix ---");
    assert_eq!(lines[1], format!("{}{:>8}{:>8}{:>8}", " ".repeat(8), "A", "B", "C"));
    assert_eq!(lines[2], format!("{:<8}{:>8}{:>8}{:>8}", "A", "INF", "2.0", "0.5"));
    assert_eq!(lines[3], format!("{:<8}{:>8}{:>8}{:>8}", "B", "INF", "INF", "INF"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_render_order() {
    let order = vec!["A".to_string(), "B".to_string()];
    assert_eq!(render_order(&order), "A -> B");
    assert_eq!(render_order(&[]), "");
}

// ==================== Snapshots ====================

#[test]
fn test_snapshot_uses_null_for_missing_edges() {
    let snapshot = GraphSnapshot::capture(&small_graph());
    assert!(snapshot.directed);
    assert_eq!(snapshot.vertices, vec!["A", "B", "C"]);
    assert_eq!(snapshot.adjacency[0].len(), 2);
    assert_eq!(snapshot.adjacency[0][1].to, "C");
    assert_eq!(snapshot.matrix[0], vec![None, Some(2.0), Some(0.5)]);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["matrix"][1][0].is_null());
    assert_eq!(json["adjacency"][0][0]["to"], "B");
    assert_eq!(json["adjacency"][0][0]["weight"], 2.0);
}

#[test]
fn test_traversal_report() {
    let report = TraversalReport::run(&small_graph(), "A", TraversalOrder::BreadthFirst);
    assert_eq!(report.order, "BFS");
    assert_eq!(report.visited, vec!["A", "B", "C"]);

    let missing = TraversalReport::run(&small_graph(), "Z", TraversalOrder::DepthFirst);
    assert!(missing.visited.is_empty());
}

// ==================== Graph definitions ====================

#[test]
fn test_parse_and_build_config() {
    let config = parse_config(TRIANGLE).unwrap();
    assert!(config.directed);
    assert_eq!(config.edges.len(), 2);
    assert_eq!(config.edges[1].weight, 1.0);

    let graph = config.build().unwrap();
    assert_eq!(graph.weight("A", "B").unwrap(), Some(2.0));
    assert_eq!(graph.weight("B", "A").unwrap(), None);
    assert_eq!(graph.bfs("A"), vec!["A", "B", "C"]);
}

#[test]
fn test_config_with_unknown_vertex_fails_on_build() {
    let config = parse_config(
        r#"
        vertices = ["A"]
        edges = [{ from = "A", to = "B" }]
        "#,
    )
    .unwrap();
    assert!(matches!(config.build(), Err(GraphError::VertexNotFound(_))));
}

#[test]
fn test_config_with_duplicate_vertex_fails_on_build() {
    let config = parse_config(r#"vertices = ["A", "A"]"#).unwrap();
    assert!(matches!(config.build(), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp(TRIANGLE);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.vertices, vec!["A", "B", "C"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_config(Path::new("/nonexistent/graph.toml"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let explicit = Path::new("graph.toml");
    assert_eq!(
        resolve_config_path(Some(explicit)).as_deref(),
        Some(explicit)
    );
}

#[test]
fn test_campus_config_shape() {
    let config = GraphConfig::campus(false);
    assert_eq!(config.vertices.len(), 19);
    assert_eq!(config.edges.len(), 42);
    assert!(config
        .edges
        .iter()
        .all(|e| (1.0..=8.0).contains(&e.weight)));
}

// ==================== CLI commands ====================

#[test]
fn test_load_graph_from_file_with_override() {
    let file = write_temp(TRIANGLE);
    let graph = commands::load_graph(Some(file.path()), Some(false)).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.weight("B", "A").unwrap(), Some(2.0));
}

#[test]
fn test_commands_run() {
    let graph = small_graph();
    for json in [false, true] {
        commands::cmd_info(&graph, json).unwrap();
        commands::cmd_show(&graph, json).unwrap();
        commands::cmd_neighbors(&graph, "A", json).unwrap();
        commands::cmd_traverse(&graph, "A", TraversalOrder::DepthFirst, json).unwrap();
        commands::cmd_traverse(&graph, "missing", TraversalOrder::BreadthFirst, json).unwrap();
    }
}

#[test]
fn test_neighbors_command_rejects_unknown_vertex() {
    let result = commands::cmd_neighbors(&small_graph(), "Z", false);
    assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
}
