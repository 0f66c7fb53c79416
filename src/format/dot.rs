//! Graphviz DOT rendering.
//!
//! Only the basic subset is produced: one statement per vertex (so isolated
//! vertices appear) and one per edge, with weights as edge labels. Feed the
//! output to `dot -Tpng` or any DOT viewer to get a picture.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{format_weight, GraphResult};

/// Writer for the DOT format.
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name written after `graph`/`digraph`.
    name: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the graph name.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Write the graph to a file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the graph to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let (keyword, connector) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{keyword} {} {{", quote(&self.name))?;
        for vertex in graph.vertices() {
            writeln!(writer, "    {};", quote(vertex))?;
        }
        for edge in graph.list_edges() {
            write!(
                writer,
                "    {} {connector} {}",
                quote(&edge.origin),
                quote(&edge.destination)
            )?;
            if let Some(w) = edge.weight {
                write!(writer, " [label={}]", quote(&format_weight(w)))?;
            }
            writeln!(writer, ";")?;
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Render the graph into a string.
    pub fn render(&self, graph: &Graph) -> GraphResult<String> {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Quote an identifier, escaping embedded quotes and backslashes.
fn quote(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn undirected_uses_double_dash() {
        let graph = GraphBuilder::undirected()
            .vertices(["A", "B", "C"])
            .weighted("A", "B", 2.5)
            .build()
            .unwrap();
        let dot = DotWriter::new().render(&graph).unwrap();

        assert!(dot.starts_with("graph \"G\" {"));
        assert!(dot.contains("\"A\" -- \"B\" [label=\"2.5\"];"));
        assert!(dot.contains("    \"C\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn directed_uses_arrow_and_omits_missing_weight() {
        let graph = GraphBuilder::directed()
            .vertices(["x", "y"])
            .link("x", "y")
            .build()
            .unwrap();
        let dot = DotWriter::new().name("demo").render(&graph).unwrap();

        assert!(dot.starts_with("digraph \"demo\" {"));
        assert!(dot.contains("\"x\" -> \"y\";"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
