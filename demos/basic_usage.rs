//! Basic build -> traverse -> render flow.

use graphwalk::*;

fn main() -> GraphResult<()> {
    // Build a small undirected graph
    let graph = GraphBuilder::undirected()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B", 1.0)
        .edge("A", "C", 4.0)
        .edge("B", "D", 2.0)
        .build()?;

    println!(
        "Graph created with {} vertices and {} edge entries",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("BFS from A: {:?}", graph.bfs("A"));
    println!("DFS from A: {:?}", graph.dfs("A"));

    println!();
    print!("{}", render_adjacency_list(&graph));
    println!();
    print!("{}", render_adjacency_matrix(&graph));

    // The campus demo, as a directed graph
    let campus = GraphConfig::campus(true).build()?;
    println!();
    println!("Campus BFS from Gate: {:?}", campus.bfs("Gate"));

    Ok(())
}
