//! Phase 3 tests: predefined template, overwrite and merge loading.

use tinygraph::graph::{Graph, GraphBuilder, LoadMode, MergeReport, Template};
use tinygraph::types::{Edge, GraphError, GraphMode, MAX_VERTICES};

// ==================== Predefined Template ====================

#[test]
fn test_predefined_template_shape() {
    let template = Template::predefined();
    assert_eq!(template.vertices.len(), 5);
    assert_eq!(template.edges.len(), 6);
    assert!(template.edges.iter().all(|e| e.weight.is_some()));
}

#[test]
fn test_load_mode_names() {
    assert_eq!(LoadMode::from_name("overwrite"), Some(LoadMode::Overwrite));
    assert_eq!(LoadMode::from_name("MERGE"), Some(LoadMode::Merge));
    assert_eq!(LoadMode::from_name("cancel"), None);
}

// ==================== Overwrite ====================

#[test]
fn test_overwrite_replaces_graph() {
    let mut graph = GraphBuilder::undirected()
        .vertices(["X", "Y"])
        .link("X", "Y")
        .build()
        .unwrap();

    let report = graph
        .load_template(&Template::predefined(), LoadMode::Overwrite)
        .unwrap();

    assert_eq!(
        report,
        MergeReport {
            vertices_added: 5,
            edges_added: 6
        }
    );
    assert!(!graph.has_vertex("X"));
    assert_eq!(graph.vertices(), &["A", "B", "C", "D", "E"]);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_overwrite_keeps_mode() {
    let mut graph = Graph::directed();
    graph
        .load_template(&Template::predefined(), LoadMode::Overwrite)
        .unwrap();
    assert!(graph.is_directed());
    assert!(graph.has_edge("A", "B"));
    assert!(!graph.has_edge("B", "A"));
}

#[test]
fn test_overwrite_twice_is_stable() {
    let mut graph = Graph::undirected();
    graph
        .load_template(&Template::predefined(), LoadMode::Overwrite)
        .unwrap();
    let once = graph.clone();
    graph
        .load_template(&Template::predefined(), LoadMode::Overwrite)
        .unwrap();
    assert_eq!(graph, once);
}

// ==================== Merge ====================

#[test]
fn test_merge_into_empty_equals_overwrite() {
    let mut merged = Graph::undirected();
    let mut overwritten = Graph::undirected();
    merged
        .load_template(&Template::predefined(), LoadMode::Merge)
        .unwrap();
    overwritten
        .load_template(&Template::predefined(), LoadMode::Overwrite)
        .unwrap();
    assert_eq!(merged, overwritten);
}

#[test]
fn test_merge_is_idempotent() {
    let mut graph = GraphBuilder::undirected()
        .vertices(["A", "Q"])
        .link("A", "Q")
        .build()
        .unwrap();

    let first = graph
        .load_template(&Template::predefined(), LoadMode::Merge)
        .unwrap();
    assert_eq!(first.vertices_added, 4);
    assert_eq!(first.edges_added, 6);
    let once = graph.clone();

    let second = graph
        .load_template(&Template::predefined(), LoadMode::Merge)
        .unwrap();
    assert!(second.is_noop());
    assert_eq!(graph, once);
}

#[test]
fn test_merge_keeps_existing_weights() {
    let mut graph = GraphBuilder::undirected()
        .vertices(["A", "B", "C"])
        .weighted("B", "A", 100.0)
        .link("B", "C")
        .build()
        .unwrap();

    let report = graph
        .load_template(&Template::predefined(), LoadMode::Merge)
        .unwrap();

    assert_eq!(report.vertices_added, 2);
    assert_eq!(report.edges_added, 4);
    assert_eq!(graph.edge_weight("A", "B"), Some(Some(100.0)));
    assert_eq!(graph.edge_weight("B", "C"), Some(None));
    assert_eq!(graph.edge_weight("C", "E"), Some(Some(3.0)));
}

#[test]
fn test_merge_directed_treats_reverse_edge_as_new() {
    let mut graph = GraphBuilder::directed()
        .vertices(["A", "B"])
        .weighted("B", "A", 9.0)
        .build()
        .unwrap();

    let report = graph
        .load_template(&Template::predefined(), LoadMode::Merge)
        .unwrap();
    assert_eq!(report.edges_added, 6);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.edge_weight("B", "A"), Some(Some(9.0)));
}

#[test]
fn test_merge_over_capacity_is_atomic() {
    let mut graph = Graph::undirected();
    for i in 0..(MAX_VERTICES - 2) {
        graph.add_vertex(&format!("n{i}")).unwrap();
    }
    let before = graph.clone();

    let result = graph.load_template(&Template::predefined(), LoadMode::Merge);
    assert!(matches!(result, Err(GraphError::CapacityExceeded { .. })));
    assert_eq!(graph, before);
}

#[test]
fn test_merge_template_with_dangling_edge_is_atomic() {
    let mut graph = GraphBuilder::undirected().vertex("A").build().unwrap();
    let before = graph.clone();

    let vertices = vec!["B".to_string()];
    let edges = vec![Edge::unweighted("A", "B"), Edge::unweighted("B", "Z")];
    let result = graph.merge_template(&vertices, &edges, LoadMode::Merge);

    assert!(matches!(result, Err(GraphError::MissingEndpoint(ref id)) if id == "Z"));
    assert_eq!(graph, before);
}

#[test]
fn test_custom_template() {
    let template = Template::new(["p", "q"], vec![Edge::weighted("p", "q", 0.5)]);
    let mut graph = Graph::new(GraphMode::Directed);
    let report = graph.load_template(&template, LoadMode::Merge).unwrap();
    assert_eq!(report.vertices_added, 2);
    assert_eq!(report.edges_added, 1);
    assert_eq!(graph.shortest_path("p", "q").unwrap().cost, 0.5);
}
