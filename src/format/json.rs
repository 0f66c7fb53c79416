//! JSON snapshot of a graph.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Edge, GraphResult};

/// Serializable view of a graph.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a> {
    pub directed: bool,
    pub vertices: &'a [String],
    pub edges: &'a [Edge],
}

impl<'a> GraphSnapshot<'a> {
    pub fn of(graph: &'a Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            vertices: graph.vertices(),
            edges: graph.list_edges(),
        }
    }
}

/// Writer for JSON snapshots.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Create a new writer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a snapshot to a file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a snapshot to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let snapshot = GraphSnapshot::of(graph);
        if self.pretty {
            serde_json::to_writer_pretty(writer, &snapshot)?;
        } else {
            serde_json::to_writer(writer, &snapshot)?;
        }
        Ok(())
    }
}
