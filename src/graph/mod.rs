//! Weighted undirected graph and minimum spanning trees
//!
//! [`WeightedGraph`] owns the vertices and edges; [`WeightedGraph::run_kruskal`]
//! computes a [`SpanningForest`] backed by a per-run [`DisjointSet`].

pub mod core;
pub mod disjoint_set;
pub mod mst;

pub use self::core::{Edge, GraphSnapshot, WeightedGraph};
pub use disjoint_set::DisjointSet;
pub use mst::{kruskal, KruskalRun, MstStatus, SpanningForest};
