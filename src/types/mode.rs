//! Directed/undirected mode. All direction-dependent decisions are made here.

use serde::Serialize;

use super::edge::EdgeKey;

/// Whether edges have a direction. Fixed when a graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// (A,B) and (B,A) are distinct edges.
    Directed,
    /// (A,B) and (B,A) are the same edge.
    Undirected,
}

impl GraphMode {
    /// Build a mode from a `directed` flag.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// True for [`GraphMode::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// The lookup key for an edge between `u` and `v`.
    ///
    /// Undirected keys are ordered so both orientations map to the same key.
    pub fn key(&self, u: &str, v: &str) -> EdgeKey {
        match self {
            Self::Directed => EdgeKey::new(u, v),
            Self::Undirected if u <= v => EdgeKey::new(u, v),
            Self::Undirected => EdgeKey::new(v, u),
        }
    }

    /// Arrow used when printing an edge.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Directed => "->",
            Self::Undirected => "<->",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Name of the connectivity notion that applies in this mode.
    pub fn connectivity_name(&self) -> &'static str {
        match self {
            Self::Directed => "weakly connected",
            Self::Undirected => "connected",
        }
    }

    /// Parse a mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "digraph" => Some(Self::Directed),
            "undirected" | "graph" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
