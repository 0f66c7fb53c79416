//! Core graph structure: bounded vertex list and edge list with a key index.

use std::collections::HashMap;

use crate::types::{
    Capacity, Edge, EdgeKey, GraphError, GraphMode, GraphResult, MAX_EDGES, MAX_VERTICES,
};

use super::adjacency::AdjacencyView;
use super::shortest_path::{dijkstra, ShortestPath};
use super::summary::{Connectivity, GraphInfo, VertexDegree};
use super::traversal::{bfs_order, component_count};

/// The in-memory graph a session builds and queries.
///
/// Holds at most [`MAX_VERTICES`] vertices and [`MAX_EDGES`] edges. Every
/// mutating operation either succeeds completely or returns an error with the
/// graph untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Fixed at construction.
    mode: GraphMode,
    /// Vertex labels in insertion order.
    vertices: Vec<String>,
    /// Edges in insertion order.
    edges: Vec<Edge>,
    /// Canonical key -> position in `edges`.
    edge_index: HashMap<EdgeKey, usize>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// The graph's mode.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no vertices (and so no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn list_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertices.iter().any(|v| v == id)
    }

    /// True if an edge `u -> v` exists. Symmetric for undirected graphs.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_index.contains_key(&self.mode.key(u, v))
    }

    /// Get the edge between `u` and `v`.
    pub fn edge(&self, u: &str, v: &str) -> Option<&Edge> {
        self.edge_index
            .get(&self.mode.key(u, v))
            .map(|&pos| &self.edges[pos])
    }

    /// Weight of the edge between `u` and `v`: `None` if there is no such
    /// edge, `Some(None)` if it exists unweighted.
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Option<f64>> {
        self.edge(u, v).map(|e| e.weight)
    }

    /// Add a vertex.
    pub fn add_vertex(&mut self, id: &str) -> GraphResult<()> {
        if self.vertices.len() >= MAX_VERTICES {
            return Err(GraphError::CapacityExceeded {
                kind: Capacity::Vertices,
                max: MAX_VERTICES,
            });
        }
        if self.has_vertex(id) {
            return Err(GraphError::AlreadyExists(id.to_string()));
        }

        self.vertices.push(id.to_string());
        log::debug!("added vertex '{id}' ({} total)", self.vertices.len());
        Ok(())
    }

    /// Add an edge, or overwrite the weight of an existing one.
    ///
    /// The edge limit only rejects new edges: re-adding an existing edge at
    /// [`MAX_EDGES`] replaces its weight and leaves the count at the limit.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Option<f64>) -> GraphResult<()> {
        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(GraphError::InvalidWeight(w));
            }
        }

        let key = self.mode.key(u, v);
        let existing = self.edge_index.get(&key).copied();

        if existing.is_none() && self.edges.len() >= MAX_EDGES {
            return Err(GraphError::CapacityExceeded {
                kind: Capacity::Edges,
                max: MAX_EDGES,
            });
        }
        for endpoint in [u, v] {
            if !self.has_vertex(endpoint) {
                return Err(GraphError::MissingEndpoint(endpoint.to_string()));
            }
        }

        match existing {
            Some(pos) => {
                self.edges[pos].weight = weight;
                log::debug!("updated weight of edge '{u}' {} '{v}'", self.mode.arrow());
            }
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(Edge::new(u, v, weight));
                log::debug!(
                    "added edge '{u}' {} '{v}' ({} total)",
                    self.mode.arrow(),
                    self.edges.len()
                );
            }
        }
        Ok(())
    }

    /// Add a prepared edge.
    pub fn insert_edge(&mut self, edge: &Edge) -> GraphResult<()> {
        self.add_edge(&edge.origin, &edge.destination, edge.weight)
    }

    /// Remove a vertex and all its edges. Returns the number of edges removed.
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<usize> {
        let pos = self
            .vertices
            .iter()
            .position(|v| v == id)
            .ok_or_else(|| GraphError::NotFound(format!("Vertex '{id}'")))?;

        self.vertices.remove(pos);

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        let removed = before - self.edges.len();
        self.rebuild_index();

        log::debug!("removed vertex '{id}' and {removed} incident edge(s)");
        Ok(removed)
    }

    /// Remove a specific edge.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> GraphResult<Edge> {
        let pos = self.edge_index.get(&self.mode.key(u, v)).copied().ok_or_else(|| {
            GraphError::NotFound(format!("Edge '{u}' {} '{v}'", self.mode.arrow()))
        })?;

        let removed = self.edges.remove(pos);
        self.rebuild_index();

        log::debug!("removed edge '{u}' {} '{v}'", self.mode.arrow());
        Ok(removed)
    }

    /// Remove every vertex and edge. The mode is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.edge_index.clear();
        log::debug!("cleared graph");
    }

    /// Number of edge incidences at `id`, counting both directions.
    /// A self-loop counts twice.
    pub fn degree(&self, id: &str) -> Option<usize> {
        if !self.has_vertex(id) {
            return None;
        }
        let degree = self
            .edges
            .iter()
            .map(|e| usize::from(e.origin == id) + usize::from(e.destination == id))
            .sum();
        Some(degree)
    }

    /// Every vertex with its degree, in insertion order.
    pub fn list_vertices(&self) -> Vec<VertexDegree> {
        self.vertices
            .iter()
            .map(|v| VertexDegree {
                id: v.clone(),
                degree: self.degree(v).unwrap_or(0),
            })
            .collect()
    }

    /// Summary of the graph.
    pub fn info(&self) -> GraphInfo {
        let view = self.adjacency();
        let components = component_count(&view);
        let connectivity = if self.vertices.len() <= 1 {
            Connectivity::NotApplicable
        } else if components == 1 {
            Connectivity::Connected
        } else {
            Connectivity::Disconnected
        };

        GraphInfo {
            mode: self.mode,
            vertex_count: self.vertices.len(),
            edge_count: self.edges.len(),
            connectivity,
            components,
            degrees: self.list_vertices(),
        }
    }

    /// Read-only adjacency view handed to the path and traversal algorithms.
    pub fn adjacency(&self) -> AdjacencyView<'_> {
        AdjacencyView::new(self.mode, &self.vertices, &self.edges)
    }

    /// Minimum-weight path from `source` to `target`.
    pub fn shortest_path(&self, source: &str, target: &str) -> GraphResult<ShortestPath> {
        dijkstra(&self.adjacency(), source, target)
    }

    /// Breadth-first visitation order from `source`.
    pub fn bfs_order(&self, source: &str) -> GraphResult<Vec<String>> {
        bfs_order(&self.adjacency(), source)
    }

    /// Rebuild the key index from the current edge list.
    fn rebuild_index(&mut self) {
        self.edge_index.clear();
        for (pos, edge) in self.edges.iter().enumerate() {
            self.edge_index
                .insert(self.mode.key(&edge.origin, &edge.destination), pos);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}
