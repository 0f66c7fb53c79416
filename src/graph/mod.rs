//! In-memory graph model and the algorithms that run over it.

pub mod adjacency;
pub mod builder;
pub mod model;
pub mod shortest_path;
pub mod summary;
pub mod template;
pub mod traversal;

pub use adjacency::{AdjacencyView, Arc};
pub use builder::GraphBuilder;
pub use model::Graph;
pub use shortest_path::{dijkstra, ShortestPath};
pub use summary::{Connectivity, GraphInfo, VertexDegree};
pub use template::{LoadMode, MergeReport, Template};
pub use traversal::{bfs, bfs_order, component_count, is_weakly_connected};
