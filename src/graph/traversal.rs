//! Graph traversal algorithms (BFS and DFS) over vertex indices.

use std::collections::VecDeque;

use super::LabeledGraph;

/// Which traversal discipline to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Layer by layer, using a FIFO frontier.
    BreadthFirst,
    /// As deep as possible first, using a LIFO frontier.
    DepthFirst,
}

impl TraversalOrder {
    /// Short name used in output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    /// Parse a traversal order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// BFS from `start`, returning visited indices in dequeue order.
///
/// Neighbors are examined in adjacency-list order and marked visited when
/// enqueued, so no vertex is queued twice.
pub fn bfs_order(graph: &LabeledGraph, start: usize) -> Vec<usize> {
    let n = graph.vertex_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for edge in graph.neighbors_of(current).unwrap_or(&[]) {
            if visited[edge.destination] {
                continue;
            }
            visited[edge.destination] = true;
            queue.push_back(edge.destination);
        }
    }

    order
}

/// DFS from `start`, returning indices in pre-order.
///
/// Each stack frame is a vertex plus a cursor into its adjacency list, which
/// reproduces recursive visiting order without using the call stack.
pub fn dfs_order(graph: &LabeledGraph, start: usize) -> Vec<usize> {
    let n = graph.vertex_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start] = true;
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        let neighbors = graph.neighbors_of(vertex).unwrap_or(&[]);

        let Some(edge) = neighbors.get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let next = edge.destination;
        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push((next, 0));
        }
    }

    order
}
