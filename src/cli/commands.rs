//! CLI command implementations.
//!
//! Each command runs one graph operation and prints the outcome to stdout,
//! as text or as a JSON document.

use std::path::Path;

use crate::format::{DotWriter, JsonWriter};
use crate::graph::{Connectivity, Graph, LoadMode, Template};
use crate::types::{format_weight, Edge, GraphError, GraphResult, MAX_EDGES, MAX_VERTICES};

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn describe_edge(graph: &Graph, edge: &Edge) -> String {
    let arrow = graph.mode().arrow();
    match edge.weight {
        Some(w) => format!(
            "{} {arrow} {} (weight {})",
            edge.origin,
            edge.destination,
            format_weight(w)
        ),
        None => format!("{} {arrow} {}", edge.origin, edge.destination),
    }
}

/// Add a vertex. A duplicate is reported and otherwise ignored.
pub fn cmd_add_vertex(graph: &mut Graph, id: &str, json: bool) -> GraphResult<()> {
    let added = match graph.add_vertex(id) {
        Ok(()) => true,
        Err(e) if e.is_benign() => false,
        Err(e) => return Err(e),
    };

    if json {
        print_json(&serde_json::json!({
            "vertex": id,
            "added": added,
            "vertex_count": graph.vertex_count(),
        }));
    } else if added {
        println!(
            "Added vertex '{id}' ({}/{MAX_VERTICES})",
            graph.vertex_count()
        );
    } else {
        println!("Vertex '{id}' already exists, nothing to do");
    }
    Ok(())
}

/// Add an edge, or update the weight of an existing one.
pub fn cmd_add_edge(
    graph: &mut Graph,
    u: &str,
    v: &str,
    weight: Option<f64>,
    json: bool,
) -> GraphResult<()> {
    let existed = graph.has_edge(u, v);
    graph.add_edge(u, v, weight)?;

    if json {
        print_json(&serde_json::json!({
            "origin": u,
            "destination": v,
            "weight": weight,
            "updated": existed,
            "edge_count": graph.edge_count(),
        }));
    } else {
        let verb = if existed { "Updated" } else { "Added" };
        let edge = Edge::new(u, v, weight);
        println!(
            "{verb} edge {} ({}/{MAX_EDGES})",
            describe_edge(graph, &edge),
            graph.edge_count()
        );
    }
    Ok(())
}

/// Remove a vertex and its incident edges.
pub fn cmd_remove_vertex(graph: &mut Graph, id: &str, json: bool) -> GraphResult<()> {
    let removed_edges = graph.remove_vertex(id)?;

    if json {
        print_json(&serde_json::json!({
            "vertex": id,
            "edges_removed": removed_edges,
        }));
    } else if removed_edges > 0 {
        println!("Removed vertex '{id}' and {removed_edges} incident edge(s)");
    } else {
        println!("Removed vertex '{id}'");
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(graph: &mut Graph, u: &str, v: &str, json: bool) -> GraphResult<()> {
    let removed = graph.remove_edge(u, v)?;

    if json {
        print_json(&serde_json::json!({ "removed": removed }));
    } else {
        println!("Removed edge {}", describe_edge(graph, &removed));
    }
    Ok(())
}

/// List vertices with their degree.
pub fn cmd_vertices(graph: &Graph, json: bool) -> GraphResult<()> {
    let vertices = graph.list_vertices();

    if json {
        print_json(&serde_json::json!({ "vertices": vertices }));
    } else if vertices.is_empty() {
        println!("The graph has no vertices.");
    } else {
        println!("Vertices ({}):", vertices.len());
        for v in &vertices {
            println!("  {:<12} degree {}", v.id, v.degree);
        }
    }
    Ok(())
}

/// List edges in insertion order.
pub fn cmd_edges(graph: &Graph, json: bool) -> GraphResult<()> {
    let edges = graph.list_edges();

    if json {
        print_json(&serde_json::json!({ "edges": edges }));
    } else if edges.is_empty() {
        println!("The graph has no edges.");
    } else {
        println!("Edges ({}):", edges.len());
        for edge in edges {
            println!("  {}", describe_edge(graph, edge));
        }
    }
    Ok(())
}

/// Render the graph as DOT, to stdout or to a file.
pub fn cmd_render(graph: &Graph, path: Option<&Path>) -> GraphResult<()> {
    if graph.is_empty() {
        println!("The graph is empty. Add vertices first.");
        return Ok(());
    }

    let writer = DotWriter::new();
    match path {
        Some(path) => {
            writer.write_to_file(graph, path)?;
            println!("Rendered to {}", path.display());
        }
        None => print!("{}", writer.render(graph)?),
    }
    Ok(())
}

/// Display summary information.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<()> {
    let info = graph.info();

    if json {
        let mut value = serde_json::to_value(&info)?;
        value["connected"] = serde_json::json!(info.connectivity.as_bool());
        print_json(&value);
        return Ok(());
    }

    println!("Mode: {}", info.mode);
    println!("Vertices: {}/{MAX_VERTICES}", info.vertex_count);
    println!("Edges: {}/{MAX_EDGES}", info.edge_count);
    if !info.degrees.is_empty() {
        println!("Degrees:");
        for v in &info.degrees {
            println!("  {:<12} {}", v.id, v.degree);
        }
    }
    let label = info.mode.connectivity_name();
    match info.connectivity {
        Connectivity::NotApplicable => {}
        Connectivity::Connected => println!("Graph is {label}: yes"),
        Connectivity::Disconnected => println!(
            "Graph is {label}: no ({} components)",
            info.components
        ),
    }
    Ok(())
}

/// Shortest path between two vertices. An unreachable target is reported
/// as an empty result.
pub fn cmd_path(graph: &Graph, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let result = match graph.shortest_path(source, target) {
        Ok(result) => Some(result),
        Err(GraphError::NoPath { .. }) => None,
        Err(e) => return Err(e),
    };

    if json {
        match &result {
            Some(r) => print_json(&serde_json::json!({ "path": r.path, "cost": r.cost })),
            None => print_json(&serde_json::json!({ "path": [], "cost": null })),
        }
        return Ok(());
    }

    match result {
        Some(r) => {
            println!("Path: {}", r.path.join(" -> "));
            println!("Cost: {}", format_weight(r.cost));
        }
        None => println!("No path from '{source}' to '{target}'"),
    }
    Ok(())
}

/// Breadth-first order from a vertex.
pub fn cmd_bfs(graph: &Graph, source: &str, json: bool) -> GraphResult<()> {
    let order = graph.bfs_order(source)?;

    if json {
        print_json(&serde_json::json!({ "source": source, "order": order }));
    } else {
        println!("BFS from '{source}': {}", order.join(", "));
    }
    Ok(())
}

/// Load the predefined template.
pub fn cmd_template(graph: &mut Graph, mode: LoadMode, json: bool) -> GraphResult<()> {
    let report = graph.load_template(&Template::predefined(), mode)?;

    if json {
        print_json(&serde_json::json!({
            "mode": mode.name(),
            "vertices_added": report.vertices_added,
            "edges_added": report.edges_added,
        }));
    } else if report.is_noop() {
        println!("Template already present, nothing added");
    } else {
        println!(
            "Template loaded ({}): {} vertex(es), {} edge(s) added",
            mode.name(),
            report.vertices_added,
            report.edges_added
        );
    }
    Ok(())
}

/// Print the predefined template without loading it.
pub fn cmd_show_template(json: bool) -> GraphResult<()> {
    let template = Template::predefined();

    if json {
        print_json(&serde_json::json!({
            "vertices": template.vertices,
            "edges": template.edges,
        }));
    } else {
        println!("Vertices: {}", template.vertices.join(", "));
        println!("Edges:");
        for edge in &template.edges {
            match edge.weight {
                Some(w) => println!(
                    "  {} - {} (weight {})",
                    edge.origin,
                    edge.destination,
                    format_weight(w)
                ),
                None => println!("  {} - {}", edge.origin, edge.destination),
            }
        }
    }
    Ok(())
}

/// Remove every vertex and edge. The graph keeps its mode.
pub fn cmd_clear(graph: &mut Graph, json: bool) -> GraphResult<()> {
    let (vertices, edges) = (graph.vertex_count(), graph.edge_count());
    graph.clear();

    if json {
        print_json(&serde_json::json!({
            "vertices_removed": vertices,
            "edges_removed": edges,
        }));
    } else {
        println!("Cleared {vertices} vertex(es) and {edges} edge(s)");
    }
    Ok(())
}

/// Write a JSON snapshot to a file.
pub fn cmd_export(graph: &Graph, path: &Path) -> GraphResult<()> {
    JsonWriter::new(true).write_to_file(graph, path)?;
    println!("Exported to {}", path.display());
    Ok(())
}
