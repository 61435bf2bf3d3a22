//! Core graph structure — named vertices with a synchronized adjacency list
//! and adjacency matrix.

use std::collections::HashMap;

use crate::types::{is_edge, Edge, GraphError, GraphResult, NO_EDGE};

use super::traversal::{bfs_order, dfs_order, TraversalOrder};

/// A weighted graph over a fixed, named vertex set.
///
/// Every edge lives twice: once in the source vertex's adjacency list and
/// once as a matrix cell. Both are updated together by [`add_edge`], so they
/// always agree.
///
/// [`add_edge`]: LabeledGraph::add_edge
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    /// Whether edges are one-way. Fixed at construction.
    directed: bool,
    /// Index -> vertex name.
    names: Vec<String>,
    /// Vertex name -> index.
    index: HashMap<String, usize>,
    /// Outgoing edges per vertex index, in insertion order.
    adjacency: Vec<Vec<Edge>>,
    /// `matrix[u][v]` is the weight of `u -> v`, or [`NO_EDGE`].
    matrix: Vec<Vec<f64>>,
}

impl LabeledGraph {
    /// Create a graph with the given vertices and no edges.
    ///
    /// Vertex `i` of the input gets index `i`. Duplicate names are rejected.
    pub fn new<I, S>(vertices: I, directed: bool) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for name in vertices {
            let name = name.into();
            if index.contains_key(&name) {
                return Err(GraphError::InvalidArgument(format!(
                    "duplicate vertex name {name:?}"
                )));
            }
            index.insert(name.clone(), names.len());
            names.push(name);
        }

        let n = names.len();
        log::debug!("Created graph with {} vertices (directed: {})", n, directed);

        Ok(Self {
            directed,
            names,
            index,
            adjacency: vec![Vec::new(); n],
            matrix: vec![vec![NO_EDGE; n]; n],
        })
    }

    /// Add a weighted edge between two existing vertices.
    ///
    /// Undirected graphs also get the mirrored edge, except for self-loops,
    /// which are recorded once. Repeated insertions append to the list and
    /// overwrite the matrix cell.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: f64) -> GraphResult<()> {
        let u = self.vertex_index(source)?;
        let v = self.vertex_index(destination)?;

        if !weight.is_finite() {
            return Err(GraphError::InvalidArgument(format!(
                "edge weight must be finite, got {weight}"
            )));
        }

        self.adjacency[u].push(Edge::new(v, weight));
        self.matrix[u][v] = weight;

        if !self.directed && u != v {
            self.adjacency[v].push(Edge::new(u, weight));
            self.matrix[v][u] = weight;
        }

        log::debug!("Added edge {:?} -> {:?} (w: {})", source, destination, weight);
        Ok(())
    }

    /// Vertex names in BFS order from `start`. Empty if `start` is unknown.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        self.traverse(start, TraversalOrder::BreadthFirst)
    }

    /// Vertex names in DFS order from `start`. Empty if `start` is unknown.
    pub fn dfs(&self, start: &str) -> Vec<String> {
        self.traverse(start, TraversalOrder::DepthFirst)
    }

    /// Run the requested traversal and map the visited indices to names.
    pub fn traverse(&self, start: &str, order: TraversalOrder) -> Vec<String> {
        let Some(&start_idx) = self.index.get(start) else {
            log::warn!("{} from unknown vertex {:?}: nothing to visit", order, start);
            return Vec::new();
        };

        let visited = match order {
            TraversalOrder::BreadthFirst => bfs_order(self, start_idx),
            TraversalOrder::DepthFirst => dfs_order(self, start_idx),
        };
        log::debug!("{} from {:?} visited {} vertices", order, start, visited.len());

        visited
            .into_iter()
            .map(|idx| self.names[idx].clone())
            .collect()
    }

    /// Outgoing edges of a vertex, in insertion order.
    pub fn neighbors(&self, vertex: &str) -> GraphResult<&[Edge]> {
        let idx = self.vertex_index(vertex)?;
        Ok(&self.adjacency[idx])
    }

    /// Outgoing edges by index. `None` if the index is out of range.
    pub fn neighbors_of(&self, index: usize) -> Option<&[Edge]> {
        self.adjacency.get(index).map(Vec::as_slice)
    }

    /// The full weight matrix.
    pub fn adjacency_matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Weight of `source -> destination`, or `None` when there is no edge.
    pub fn weight(&self, source: &str, destination: &str) -> GraphResult<Option<f64>> {
        let u = self.vertex_index(source)?;
        let v = self.vertex_index(destination)?;
        let cell = self.matrix[u][v];
        Ok(is_edge(cell).then_some(cell))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of adjacency-list entries across all vertices.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Name of the vertex at `index`.
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the named vertex.
    pub fn vertex_index(&self, name: &str) -> GraphResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))
    }

    /// Whether the graph has a vertex with this name.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All vertex names, in index order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
