//! All data types for the tinygraph library.

pub mod edge;
pub mod error;
pub mod mode;

pub use edge::{format_weight, Edge, EdgeKey};
pub use error::{Capacity, GraphError, GraphResult};
pub use mode::GraphMode;

/// Maximum number of vertices a graph may hold.
pub const MAX_VERTICES: usize = 10;

/// Maximum number of edges a graph may hold.
pub const MAX_EDGES: usize = 20;
