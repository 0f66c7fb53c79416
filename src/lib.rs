//! tinygraph: a bounded in-memory graph model with an interactive session.
//!
//! A [`Graph`] holds at most ten vertices and twenty edges, is directed or
//! undirected for its whole life, and answers structural queries (degree,
//! connectivity) plus shortest-path and breadth-first queries. The `tgraph`
//! binary drives it from a slash-command REPL or a script.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{ConfigSource, OutputFormat, SessionConfig};
pub use format::{DotWriter, JsonWriter};
pub use graph::{
    Connectivity, Graph, GraphBuilder, GraphInfo, LoadMode, MergeReport, ShortestPath, Template,
    VertexDegree,
};
pub use types::{
    Capacity, Edge, GraphError, GraphMode, GraphResult, MAX_EDGES, MAX_VERTICES,
};
