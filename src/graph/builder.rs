//! Fluent API for building LabeledGraph instances.

use crate::types::GraphResult;

use super::LabeledGraph;

/// Fluent builder for constructing a LabeledGraph.
///
/// Vertices and edges are collected first; [`build`](GraphBuilder::build)
/// creates the graph and replays the edges in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Add a vertex.
    pub fn vertex(&mut self, name: impl Into<String>) -> &mut Self {
        self.vertices.push(name.into());
        self
    }

    /// Add several vertices, in order.
    pub fn vertices<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.edges.push((source.into(), destination.into(), weight));
        self
    }

    /// Build the final LabeledGraph.
    pub fn build(&self) -> GraphResult<LabeledGraph> {
        let mut graph = LabeledGraph::new(self.vertices.iter().cloned(), self.directed)?;
        for (source, destination, weight) in &self.edges {
            graph.add_edge(source, destination, *weight)?;
        }
        Ok(graph)
    }
}
