//! Phase 2 tests: shortest path, breadth-first order, connectivity.

use std::collections::HashSet;

use tinygraph::graph::{component_count, is_weakly_connected, Graph, GraphBuilder};
use tinygraph::types::{GraphError, GraphMode};

/// Five vertices, six weighted edges.
fn sample(mode: GraphMode) -> Graph {
    GraphBuilder::new(mode)
        .vertices(["A", "B", "C", "D", "E"])
        .weighted("A", "B", 2.0)
        .weighted("A", "C", 4.0)
        .weighted("B", "C", 1.0)
        .weighted("B", "D", 7.0)
        .weighted("C", "E", 3.0)
        .weighted("D", "E", 1.0)
        .build()
        .unwrap()
}

// ==================== Shortest Path ====================

#[test]
fn test_shortest_path_scenario_undirected() {
    let graph = sample(GraphMode::Undirected);
    let result = graph.shortest_path("A", "E").unwrap();
    assert_eq!(result.path, vec!["A", "B", "C", "E"]);
    assert!((result.cost - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_shortest_path_scenario_directed() {
    let graph = sample(GraphMode::Directed);
    let result = graph.shortest_path("A", "E").unwrap();
    assert_eq!(result.path, vec!["A", "B", "C", "E"]);
    assert!((result.cost - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_shortest_path_respects_direction() {
    let graph = sample(GraphMode::Directed);
    match graph.shortest_path("E", "A") {
        Err(GraphError::NoPath { from, to }) => {
            assert_eq!(from, "E");
            assert_eq!(to, "A");
        }
        other => panic!("Expected NoPath, got {:?}", other),
    }

    // Undirected: the reverse route exists with the same cost.
    let graph = sample(GraphMode::Undirected);
    let result = graph.shortest_path("E", "A").unwrap();
    assert_eq!(result.path, vec!["E", "C", "B", "A"]);
    assert!((result.cost - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_shortest_path_unknown_vertex() {
    let graph = sample(GraphMode::Undirected);
    match graph.shortest_path("A", "Z") {
        Err(GraphError::UnknownVertex(id)) => assert_eq!(id, "Z"),
        other => panic!("Expected UnknownVertex, got {:?}", other),
    }
    match graph.shortest_path("Q", "A") {
        Err(GraphError::UnknownVertex(id)) => assert_eq!(id, "Q"),
        other => panic!("Expected UnknownVertex, got {:?}", other),
    }
}

#[test]
fn test_shortest_path_disconnected() {
    let graph = GraphBuilder::undirected()
        .vertices(["A", "B", "C"])
        .link("A", "B")
        .build()
        .unwrap();
    assert!(matches!(
        graph.shortest_path("A", "C"),
        Err(GraphError::NoPath { .. })
    ));
}

#[test]
fn test_unweighted_edges_cost_one() {
    // A-B-C-D unweighted (cost 3) against a direct weighted A-D of 5.
    let graph = GraphBuilder::undirected()
        .vertices(["A", "B", "C", "D"])
        .link("A", "B")
        .link("B", "C")
        .link("C", "D")
        .weighted("A", "D", 5.0)
        .build()
        .unwrap();

    let result = graph.shortest_path("A", "D").unwrap();
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert!((result.cost - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_shortest_path_fractional_weights() {
    let graph = GraphBuilder::directed()
        .vertices(["s", "m", "t"])
        .weighted("s", "m", 0.25)
        .weighted("m", "t", 0.5)
        .weighted("s", "t", 1.0)
        .build()
        .unwrap();

    let result = graph.shortest_path("s", "t").unwrap();
    assert_eq!(result.path, vec!["s", "m", "t"]);
    assert!((result.cost - 0.75).abs() < 1e-12);
}

#[test]
fn test_shortest_path_rejects_negative_weight() {
    let graph = GraphBuilder::directed()
        .vertices(["A", "B", "C"])
        .weighted("A", "B", 1.0)
        .weighted("B", "C", -2.0)
        .build()
        .unwrap();

    match graph.shortest_path("A", "C") {
        Err(GraphError::NegativeWeight { weight, .. }) => assert_eq!(weight, -2.0),
        other => panic!("Expected NegativeWeight, got {:?}", other),
    }
}

#[test]
fn test_shortest_path_to_self() {
    let graph = sample(GraphMode::Undirected);
    let result = graph.shortest_path("C", "C").unwrap();
    assert_eq!(result.path, vec!["C"]);
    assert_eq!(result.cost, 0.0);
}

// ==================== BFS ====================

#[test]
fn test_bfs_scenario_directed() {
    let graph = sample(GraphMode::Directed);
    let order = graph.bfs_order("A").unwrap();

    // A, then its out-neighbours in edge-insertion order, then theirs.
    assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_bfs_follows_direction() {
    let graph = sample(GraphMode::Directed);
    assert_eq!(graph.bfs_order("D").unwrap(), vec!["D", "E"]);
    assert_eq!(graph.bfs_order("E").unwrap(), vec!["E"]);
}

#[test]
fn test_bfs_undirected_uses_both_orientations() {
    let graph = sample(GraphMode::Undirected);
    let order = graph.bfs_order("E").unwrap();

    // E's incident edges in insertion order: (C,E), (D,E).
    assert_eq!(order, vec!["E", "C", "D", "A", "B"]);
}

#[test]
fn test_bfs_visits_each_vertex_once() {
    let graph = GraphBuilder::undirected()
        .vertices(["A", "B", "C", "D"])
        .link("A", "B")
        .link("B", "C")
        .link("C", "A")
        .link("A", "A")
        .link("C", "D")
        .build()
        .unwrap();

    let order = graph.bfs_order("A").unwrap();
    let unique: HashSet<&String> = order.iter().collect();
    assert_eq!(order.len(), unique.len());
    assert_eq!(order.len(), 4);
    assert_eq!(order[0], "A");
}

#[test]
fn test_bfs_only_reaches_component() {
    let graph = GraphBuilder::undirected()
        .vertices(["A", "B", "X", "Y"])
        .link("A", "B")
        .link("X", "Y")
        .build()
        .unwrap();
    assert_eq!(graph.bfs_order("X").unwrap(), vec!["X", "Y"]);
}

#[test]
fn test_bfs_unknown_vertex() {
    let graph = sample(GraphMode::Directed);
    assert!(matches!(
        graph.bfs_order("nope"),
        Err(GraphError::UnknownVertex(_))
    ));
}

// ==================== Connectivity ====================

#[test]
fn test_component_count() {
    let graph = GraphBuilder::directed()
        .vertices(["A", "B", "C", "D", "E"])
        .link("B", "A")
        .link("D", "C")
        .build()
        .unwrap();
    let view = graph.adjacency();
    assert_eq!(component_count(&view), 3);
    assert!(!is_weakly_connected(&view));
}

#[test]
fn test_empty_graph_is_vacuously_connected() {
    let graph = Graph::directed();
    let view = graph.adjacency();
    assert_eq!(component_count(&view), 0);
    assert!(is_weakly_connected(&view));
}

#[test]
fn test_queries_do_not_mutate() {
    let graph = sample(GraphMode::Undirected);
    let before = graph.clone();
    let _ = graph.shortest_path("A", "E");
    let _ = graph.bfs_order("A");
    let _ = graph.info();
    assert_eq!(graph, before);
}
