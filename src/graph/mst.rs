//! Kruskal's minimum spanning tree
//!
//! Edges are sorted ascending by weight with a stable sort, so equal weights
//! are considered in insertion order and the result is deterministic. A fresh
//! [`DisjointSet`] is built for every run.

use super::core::Edge;
use super::disjoint_set::DisjointSet;
use crate::error::{DsError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MstStatus {
    /// Exactly `|V| - 1` edges were accepted
    Complete,
    /// The graph has several connected components; the edges form one tree
    /// per component.
    Disconnected { components: usize },
}

/// Result of a Kruskal run over a labelled graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest<V> {
    /// Accepted edges in the order they were selected
    pub edges: Vec<Edge<V>>,
    pub total_weight: i64,
    pub status: MstStatus,
}

impl<V: PartialEq> SpanningForest<V> {
    pub fn is_complete(&self) -> bool {
        self.status == MstStatus::Complete
    }

    /// Whether the edge `a`-`b` was selected, in either orientation
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}

/// Index-level outcome of [`kruskal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KruskalRun {
    /// Positions into the input edge slice, in selection order
    pub accepted: Vec<usize>,
    pub total_weight: i64,
    pub status: MstStatus,
}

/// Run Kruskal over `vertex_count` dense vertices and `(from, to, weight)`
/// edges.
///
/// Each undirected edge must appear once; reversed duplicates are skipped by
/// the union-find anyway but would distort tie order.
pub fn kruskal(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<KruskalRun> {
    if vertex_count < 2 {
        return Err(DsError::InsufficientVertices {
            count: vertex_count,
        });
    }
    if edges.is_empty() {
        return Err(DsError::NoEdges);
    }

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&pos| edges[pos].2);

    let mut sets = DisjointSet::new(vertex_count);
    let target = vertex_count - 1;
    let mut accepted = Vec::with_capacity(target);
    let mut total_weight = 0i64;

    for pos in order {
        let (u, v, weight) = edges[pos];
        if sets.union(u, v)? {
            accepted.push(pos);
            total_weight = total_weight
                .checked_add(weight)
                .ok_or(DsError::WeightOverflow)?;
            if accepted.len() == target {
                break;
            }
        }
    }

    let status = if accepted.len() == target {
        MstStatus::Complete
    } else {
        MstStatus::Disconnected {
            components: sets.count_sets(),
        }
    };

    Ok(KruskalRun {
        accepted,
        total_weight,
        status,
    })
}
