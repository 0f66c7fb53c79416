//! Dijkstra shortest path over an [`AdjacencyView`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::adjacency::AdjacencyView;

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Vertices from source to target, both included.
    pub path: Vec<String>,
    /// Sum of edge costs along `path`.
    pub cost: f64,
}

/// Min-heap entry. `seq` breaks cost ties in push order.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-cost path from `source` to `target`. Unweighted edges cost 1.
pub fn dijkstra(view: &AdjacencyView<'_>, source: &str, target: &str) -> GraphResult<ShortestPath> {
    let start = view
        .index_of(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;
    let goal = view
        .index_of(target)
        .ok_or_else(|| GraphError::UnknownVertex(target.to_string()))?;

    for u in 0..view.len() {
        if let Some(arc) = view.neighbors(u).iter().find(|a| a.cost() < 0.0) {
            return Err(GraphError::NegativeWeight {
                origin: view.label(u).to_string(),
                destination: view.label(arc.to).to_string(),
                weight: arc.cost(),
            });
        }
    }

    let mut dist: Vec<Option<f64>> = vec![None; view.len()];
    let mut prev: Vec<Option<usize>> = vec![None; view.len()];
    let mut done = vec![false; view.len()];
    let mut heap = BinaryHeap::new();
    let mut seq = 0;

    dist[start] = Some(0.0);
    heap.push(Frontier {
        cost: 0.0,
        seq,
        node: start,
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        if done[node] {
            continue;
        }
        done[node] = true;
        if node == goal {
            break;
        }

        for arc in view.neighbors(node) {
            let next = cost + arc.cost();
            let better = match dist[arc.to] {
                Some(current) => next < current,
                None => true,
            };
            if better && !done[arc.to] {
                dist[arc.to] = Some(next);
                prev[arc.to] = Some(node);
                seq += 1;
                heap.push(Frontier {
                    cost: next,
                    seq,
                    node: arc.to,
                });
            }
        }
    }

    let cost = match (done[goal], dist[goal]) {
        (true, Some(cost)) => cost,
        _ => {
            return Err(GraphError::NoPath {
                from: source.to_string(),
                to: target.to_string(),
            })
        }
    };

    let mut path = vec![view.label(goal).to_string()];
    let mut current = goal;
    while let Some(p) = prev[current] {
        path.push(view.label(p).to_string());
        current = p;
    }
    path.reverse();

    Ok(ShortestPath { path, cost })
}
