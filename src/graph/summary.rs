//! Plain data returned by the structural queries.

use serde::Serialize;

use crate::types::GraphMode;

/// A vertex with its total degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDegree {
    pub id: String,
    pub degree: usize,
}

/// Connectivity of a graph with more than one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Zero or one vertex: the question does not apply.
    NotApplicable,
    /// Connected (undirected) or weakly connected (directed).
    Connected,
    /// More than one component.
    Disconnected,
}

impl Connectivity {
    /// `Some(true/false)` when the graph has more than one vertex.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::NotApplicable => None,
            Self::Connected => Some(true),
            Self::Disconnected => Some(false),
        }
    }
}

/// Summary produced by [`Graph::info`](super::Graph::info).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphInfo {
    pub mode: GraphMode,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub connectivity: Connectivity,
    /// Components with edge direction ignored.
    pub components: usize,
    pub degrees: Vec<VertexDegree>,
}
