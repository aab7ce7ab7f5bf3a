//! Weighted undirected graph
//!
//! Vertices are kept in insertion order and addressed internally by dense
//! index, so the adjacency lists and the union-find used by Kruskal share the
//! same numbering. Every undirected edge is stored once in an edge list (in
//! the orientation it was added) and twice in the adjacency lists.

use super::mst::{self, MstStatus, SpanningForest};
use crate::error::{DsError, Result};
use crate::structures::Structure;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

/// A weighted edge between two labelled vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: i64,
}

impl<V: PartialEq> Edge<V> {
    /// Whether this edge joins `a` and `b`, in either orientation
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.weight)
    }
}

/// Read-only view handed to a renderer: adjacency in vertex insertion order
/// plus the current spanning forest, if one has been computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot<V> {
    pub adjacency: Vec<(V, Vec<(V, i64)>)>,
    pub mst: Option<SpanningForest<V>>,
}

#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    labels: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<(usize, i64)>>,
    /// (from, to, weight) by vertex index, in insertion order
    edges: Vec<(usize, usize, i64)>,
    mst: Option<SpanningForest<V>>,
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash + Display,
{
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            mst: None,
        }
    }

    pub fn add_vertex(&mut self, id: V) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(DsError::DuplicateVertex(id.to_string()));
        }
        let idx = self.labels.len();
        tracing::debug!(vertex = %id, index = idx, "graph add vertex");
        self.index.insert(id.clone(), idx);
        self.labels.push(id);
        self.adjacency.push(Vec::new());
        self.mst = None;
        Ok(())
    }

    /// Connect `from` and `to` in both directions.
    ///
    /// Self-loops are rejected: they can never be part of a spanning tree and
    /// would list the vertex as its own neighbor.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        let u = self.require(from)?;
        let v = self.require(to)?;

        if self.adjacency[u].iter().any(|&(n, _)| n == v)
            || self.adjacency[v].iter().any(|&(n, _)| n == u)
        {
            return Err(DsError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if weight <= 0 {
            return Err(DsError::InvalidWeight(weight));
        }
        if u == v {
            return Err(DsError::PreconditionViolated {
                operation: "add_edge",
                reason: "self-loops are not supported",
            });
        }

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edges.push((u, v, weight));
        self.mst = None;
        tracing::debug!(from = %from, to = %to, weight, "graph add edge");
        Ok(())
    }

    /// Compute a minimum spanning forest with Kruskal's algorithm and keep it
    /// as the current MST result.
    ///
    /// Fails with `WeightOverflow` when the selected weights do not fit in
    /// `i64`; the previous result is left untouched in every failure case.
    pub fn run_kruskal(&mut self) -> Result<&SpanningForest<V>> {
        let run = mst::kruskal(self.labels.len(), &self.edges)?;

        let edges: Vec<Edge<V>> = run
            .accepted
            .iter()
            .map(|&pos| {
                let (u, v, weight) = self.edges[pos];
                Edge {
                    from: self.labels[u].clone(),
                    to: self.labels[v].clone(),
                    weight,
                }
            })
            .collect();

        match run.status {
            MstStatus::Complete => tracing::info!(
                edges = edges.len(),
                total_weight = run.total_weight,
                "minimum spanning tree complete"
            ),
            MstStatus::Disconnected { components } => tracing::warn!(
                edges = edges.len(),
                total_weight = run.total_weight,
                components,
                "graph is disconnected, spanning forest only"
            ),
        }

        Ok(self.mst.insert(SpanningForest {
            edges,
            total_weight: run.total_weight,
            status: run.status,
        }))
    }

    /// Last computed MST, cleared by any change to the graph
    pub fn mst(&self) -> Option<&SpanningForest<V>> {
        self.mst.as_ref()
    }

    pub fn clear_mst(&mut self) {
        self.mst = None;
    }

    /// Drop all vertices, edges and the MST
    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.mst = None;
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&u), Some(&v)) => self.adjacency[u].iter().any(|&(n, _)| n == v),
            _ => false,
        }
    }

    /// Neighbors of `id` with edge weights, in the order the edges were added
    pub fn neighbors(&self, id: &V) -> Result<Vec<(&V, i64)>> {
        let u = self.require(id)?;
        Ok(self.adjacency[u]
            .iter()
            .map(|&(v, w)| (&self.labels[v], w))
            .collect())
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.labels
    }

    /// Each undirected edge once, in insertion order
    pub fn edges(&self) -> Vec<Edge<V>> {
        self.edges
            .iter()
            .map(|&(u, v, weight)| Edge {
                from: self.labels[u].clone(),
                to: self.labels[v].clone(),
                weight,
            })
            .collect()
    }

    pub fn snapshot(&self) -> GraphSnapshot<V> {
        let adjacency = self
            .labels
            .iter()
            .zip(&self.adjacency)
            .map(|(label, neighbors)| {
                let neighbors = neighbors
                    .iter()
                    .map(|&(v, w)| (self.labels[v].clone(), w))
                    .collect();
                (label.clone(), neighbors)
            })
            .collect();

        GraphSnapshot {
            adjacency,
            mst: self.mst.clone(),
        }
    }

    fn require(&self, id: &V) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DsError::UnknownVertex(id.to_string()))
    }
}

impl<V> Default for WeightedGraph<V>
where
    V: Clone + Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Structure for WeightedGraph<V>
where
    V: Clone + Eq + Hash + Display,
{
    fn type_name(&self) -> &'static str {
        "WeightedGraph"
    }

    /// Vertex count
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn clear(&mut self) {
        WeightedGraph::clear(self);
    }
}
