//! Graph traversal algorithms (BFS, weak components).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

use super::adjacency::AdjacencyView;

/// BFS from a vertex index, following edge direction. Returns visited indexes
/// in visitation order.
pub fn bfs(view: &AdjacencyView<'_>, start: usize) -> Vec<usize> {
    let mut visited = vec![false; view.len()];
    let mut order = Vec::with_capacity(view.len());
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for arc in view.neighbors(current) {
            if !visited[arc.to] {
                visited[arc.to] = true;
                queue.push_back(arc.to);
            }
        }
    }

    order
}

/// BFS visitation order by label.
pub fn bfs_order(view: &AdjacencyView<'_>, source: &str) -> GraphResult<Vec<String>> {
    let start = view
        .index_of(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;

    Ok(bfs(view, start)
        .into_iter()
        .map(|i| view.label(i).to_string())
        .collect())
}

/// Number of connected components with edge direction ignored.
pub fn component_count(view: &AdjacencyView<'_>) -> usize {
    let mut seen = vec![false; view.len()];
    let mut components = 0;

    for root in 0..view.len() {
        if seen[root] {
            continue;
        }
        components += 1;
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            for &next in view.weak_neighbors(current) {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }

    components
}

/// True if every vertex reaches every other once direction is ignored.
/// Vacuously true for zero or one vertex.
pub fn is_weakly_connected(view: &AdjacencyView<'_>) -> bool {
    component_count(view) <= 1
}
