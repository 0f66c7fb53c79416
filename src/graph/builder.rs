//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphMode, GraphResult};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nothing is validated until [`build`](GraphBuilder::build), which applies
/// every vertex and edge through the normal graph operations.
pub struct GraphBuilder {
    mode: GraphMode,
    vertices: Vec<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for the given mode.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    /// Create a new builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: impl Into<String>) -> Self {
        self.vertices.push(id.into());
        self
    }

    /// Add several vertices.
    pub fn vertices<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.vertices.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add an edge with a weight.
    pub fn weighted(mut self, u: impl Into<String>, v: impl Into<String>, weight: f64) -> Self {
        self.edges.push(Edge::weighted(u, v, weight));
        self
    }

    /// Add an edge without a weight.
    pub fn link(mut self, u: impl Into<String>, v: impl Into<String>) -> Self {
        self.edges.push(Edge::unweighted(u, v));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.mode);
        for vertex in &self.vertices {
            graph.add_vertex(vertex)?;
        }
        for edge in &self.edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::undirected()
    }
}
