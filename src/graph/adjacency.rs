//! Index-based adjacency view consumed by the graph algorithms.

use std::collections::HashMap;

use crate::types::{Edge, GraphMode};

/// One traversable step out of a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Index of the vertex this step reaches.
    pub to: usize,
    /// Weight of the underlying edge.
    pub weight: Option<f64>,
}

impl Arc {
    /// Weight used by path queries (unweighted = 1).
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// Snapshot of a graph's structure with vertices addressed by index.
///
/// Neighbour lists follow edge insertion order. `neighbors` respects edge
/// direction; `weak_neighbors` ignores it.
pub struct AdjacencyView<'a> {
    labels: &'a [String],
    index: HashMap<&'a str, usize>,
    forward: Vec<Vec<Arc>>,
    weak: Vec<Vec<usize>>,
}

impl<'a> AdjacencyView<'a> {
    /// Build the view. Edges whose endpoints are not in `labels` are skipped.
    pub fn new(mode: GraphMode, labels: &'a [String], edges: &[Edge]) -> Self {
        let index: HashMap<&'a str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut forward = vec![Vec::new(); labels.len()];
        let mut weak = vec![Vec::new(); labels.len()];

        for edge in edges {
            let (Some(&u), Some(&v)) = (
                index.get(edge.origin.as_str()),
                index.get(edge.destination.as_str()),
            ) else {
                continue;
            };

            forward[u].push(Arc {
                to: v,
                weight: edge.weight,
            });
            weak[u].push(v);
            if u != v {
                weak[v].push(u);
                if !mode.is_directed() {
                    forward[v].push(Arc {
                        to: u,
                        weight: edge.weight,
                    });
                }
            }
        }

        Self {
            labels,
            index,
            forward,
            weak,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of a vertex label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label of a vertex index.
    pub fn label(&self, index: usize) -> &'a str {
        &self.labels[index]
    }

    /// Steps that follow edge direction.
    pub fn neighbors(&self, index: usize) -> &[Arc] {
        &self.forward[index]
    }

    /// Adjacent vertices with direction ignored.
    pub fn weak_neighbors(&self, index: usize) -> &[usize] {
        &self.weak[index]
    }
}
