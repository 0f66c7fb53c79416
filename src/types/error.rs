//! Error types for the tinygraph library.

use thiserror::Error;

/// Which bounded collection a capacity error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// The vertex set.
    Vertices,
    /// The edge set.
    Edges,
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertices => write!(f, "vertex"),
            Self::Edges => write!(f, "edge"),
        }
    }
}

/// All errors that can occur in the tinygraph library.
///
/// Every graph error is recoverable: the operation that produced it left the
/// graph exactly as it was.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex or edge limit reached.
    #[error("Maximum {kind} count reached ({max})")]
    CapacityExceeded { kind: Capacity, max: usize },

    /// Duplicate vertex.
    #[error("Vertex '{0}' already exists")]
    AlreadyExists(String),

    /// Edge references a vertex that is not in the graph.
    #[error("Vertex '{0}' does not exist; add it before connecting it")]
    MissingEndpoint(String),

    /// Removal target (vertex or edge) is absent.
    #[error("{0} not found")]
    NotFound(String),

    /// Query references a vertex that is not in the graph.
    #[error("Unknown vertex '{0}'")]
    UnknownVertex(String),

    /// Target is unreachable from source.
    #[error("No path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    /// Weight is NaN or infinite.
    #[error("Edge weight must be a finite number, got {0}")]
    InvalidWeight(f64),

    /// Dijkstra cannot run over negative weights.
    #[error("Edge '{origin}' -> '{destination}' has negative weight {weight}")]
    NegativeWeight {
        origin: String,
        destination: String,
        weight: f64,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed session command: wrong arguments, unparsable weight, or
    /// an unknown command name.
    #[error("{0}")]
    Usage(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    /// True for the errors a session reports and moves past without
    /// treating them as failures (duplicate inserts).
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}

/// Convenience result type for tinygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
