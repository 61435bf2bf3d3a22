//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::graph::TraversalOrder;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk — inspect and traverse labeled graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Treat the graph as directed
    #[arg(long)]
    directed: bool,

    /// Path to a TOML graph definition (defaults to $GWALK_GRAPH, then the campus demo)
    #[arg(long)]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the graph
    Info,
    /// Print the adjacency list and matrix
    Show,
    /// List the outgoing edges of a vertex
    Neighbors {
        /// Vertex name
        vertex: String,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Starting vertex name
        start: String,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Starting vertex name
        start: String,
    },
    /// Traversal from a vertex with the order chosen by name
    Traverse {
        /// Starting vertex name
        start: String,
        /// Order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = commands::load_graph(cli.graph.as_deref(), cli.directed.then_some(true))
        .and_then(|graph| match &cli.command {
            Commands::Info => commands::cmd_info(&graph, json),
            Commands::Show => commands::cmd_show(&graph, json),
            Commands::Neighbors { vertex } => commands::cmd_neighbors(&graph, vertex, json),
            Commands::Bfs { start } => {
                commands::cmd_traverse(&graph, start, TraversalOrder::BreadthFirst, json)
            }
            Commands::Dfs { start } => {
                commands::cmd_traverse(&graph, start, TraversalOrder::DepthFirst, json)
            }
            Commands::Traverse { start, order } => match TraversalOrder::from_name(order) {
                Some(order) => commands::cmd_traverse(&graph, start, order, json),
                None => Err(GraphError::InvalidArgument(format!(
                    "unknown traversal order {order:?}"
                ))),
            },
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Config(_) => 2,
            GraphError::InvalidArgument(_) => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
