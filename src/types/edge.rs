//! Edge struct and its lookup key.

use serde::Serialize;

/// Canonical identity of an edge.
///
/// Built through [`GraphMode::key`](super::GraphMode::key), which orders the
/// endpoints for undirected graphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    pub(crate) fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// The endpoints in key order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

/// A connection between two vertices, optionally weighted.
///
/// `weight: None` is an unweighted edge, which is not the same as
/// `Some(0.0)`. Path queries treat unweighted edges as weight 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Origin vertex, as given when the edge was first added.
    pub origin: String,
    /// Destination vertex, as given when the edge was first added.
    pub destination: String,
    /// Optional numeric weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    /// Create an edge.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: Option<f64>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// Create an edge carrying a weight.
    pub fn weighted(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self::new(origin, destination, Some(weight))
    }

    /// Create an edge without a weight.
    pub fn unweighted(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, None)
    }

    /// Weight used by path queries.
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// True if `vertex` is either endpoint.
    pub fn touches(&self, vertex: &str) -> bool {
        self.origin == vertex || self.destination == vertex
    }

    /// True for an edge whose endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}

/// Format a weight for display: integral values print without a fraction.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}
