//! Predefined template graph and template loading.

use serde::Serialize;

use crate::types::{Edge, GraphResult};

use super::Graph;

/// How a template is applied to an existing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Clear the graph, then insert the template.
    Overwrite,
    /// Insert only the vertices and edges that are not already present.
    /// Existing edge weights are left alone.
    Merge,
}

impl LoadMode {
    /// Parse a mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "overwrite" | "replace" | "o" => Some(Self::Overwrite),
            "merge" | "m" => Some(Self::Merge),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Merge => "merge",
        }
    }
}

/// What a template load actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub vertices_added: usize,
    pub edges_added: usize,
}

impl MergeReport {
    /// True if the load changed nothing.
    pub fn is_noop(&self) -> bool {
        self.vertices_added == 0 && self.edges_added == 0
    }
}

/// A fixed set of vertices and edges that can be loaded into a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub vertices: Vec<String>,
    pub edges: Vec<Edge>,
}

impl Template {
    /// Create a template.
    pub fn new<S: Into<String>>(vertices: impl IntoIterator<Item = S>, edges: Vec<Edge>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
            edges,
        }
    }

    /// The built-in example: five vertices, six weighted edges.
    pub fn predefined() -> Self {
        Self::new(
            ["A", "B", "C", "D", "E"],
            vec![
                Edge::weighted("A", "B", 2.0),
                Edge::weighted("A", "C", 4.0),
                Edge::weighted("B", "C", 1.0),
                Edge::weighted("B", "D", 7.0),
                Edge::weighted("C", "E", 3.0),
                Edge::weighted("D", "E", 1.0),
            ],
        )
    }
}

impl Graph {
    /// Apply a set of vertices and edges according to `mode`.
    ///
    /// The load is staged on a copy, so an invariant violation part-way
    /// through (capacity, or an edge whose endpoint is in neither the graph
    /// nor the template) leaves this graph unchanged.
    pub fn merge_template(
        &mut self,
        vertices: &[String],
        edges: &[Edge],
        mode: LoadMode,
    ) -> GraphResult<MergeReport> {
        let mut staged = match mode {
            LoadMode::Overwrite => Graph::new(self.mode()),
            LoadMode::Merge => self.clone(),
        };
        let mut report = MergeReport::default();

        for vertex in vertices {
            if !staged.has_vertex(vertex) {
                staged.add_vertex(vertex)?;
                report.vertices_added += 1;
            }
        }
        for edge in edges {
            if !staged.has_edge(&edge.origin, &edge.destination) {
                staged.insert_edge(edge)?;
                report.edges_added += 1;
            }
        }

        *self = staged;
        log::debug!(
            "template {}: {} vertex(es), {} edge(s) added",
            mode.name(),
            report.vertices_added,
            report.edges_added
        );
        Ok(report)
    }

    /// Apply a [`Template`].
    pub fn load_template(
        &mut self,
        template: &Template,
        mode: LoadMode,
    ) -> GraphResult<MergeReport> {
        self.merge_template(&template.vertices, &template.edges, mode)
    }
}
