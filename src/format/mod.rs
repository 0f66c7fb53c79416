//! Text output formats: Graphviz DOT rendering and JSON snapshots.

pub mod dot;
pub mod json;

pub use dot::DotWriter;
pub use json::{GraphSnapshot, JsonWriter};
