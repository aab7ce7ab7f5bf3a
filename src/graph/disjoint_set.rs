//! Disjoint Set (Union-Find)
//!
//! Path compression plus union by rank for near-constant amortized
//! operations. Elements are dense indices `0..n`; callers that work with
//! labels keep their own label-to-index map. A fresh instance is built for
//! every spanning-tree run and thrown away afterwards.

use crate::error::{DsError, Result};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    size: Vec<usize>,
    count: usize, // number of disjoint sets
}

impl DisjointSet {
    /// Create `n` singleton sets, each element its own parent with rank 0
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            count: n,
        }
    }

    /// Root of the set containing `x`; every node on the way is re-pointed
    /// straight at the root.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            return Err(DsError::IndexOutOfRange {
                operation: "find",
                index: x,
                len: self.parent.len(),
            });
        }

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` when both are already in the same set; the caller
    /// must then skip the edge.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        // the lower-rank root goes under the other; on a tie `x`'s root survives
        let (survivor, absorbed) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => (root_y, root_x),
            Ordering::Greater | Ordering::Equal => (root_x, root_y),
        };
        if self.rank[survivor] == self.rank[absorbed] {
            self.rank[survivor] += 1;
        }
        self.parent[absorbed] = survivor;
        self.size[survivor] += self.size[absorbed];

        self.count -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Size of the set containing `x`
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    pub fn count_sets(&self) -> usize {
        self.count
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Rank of `x` (an upper bound on its subtree height)
    pub fn rank(&self, x: usize) -> Option<usize> {
        self.rank.get(x).copied()
    }
}
