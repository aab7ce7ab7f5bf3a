//! Binary Search Tree
//!
//! Plain, unbalanced BST. Values less than or equal to a node go to its left
//! subtree, greater values go right, so duplicates always descend left. The
//! shape, and therefore the height, depends entirely on insertion order.
//!
//! Children are exclusively owned by their parent (`Option<Box<TreeNode>>`).

use super::TraversalStrategy;
use crate::error::{DsError, Result};
use crate::structures::Structure;
use std::cmp::Ordering;

/// Tallest tree [`BinarySearchTree::level_order`] will lay out (at most
/// 2^17 - 1 slots).
pub const MAX_LEVEL_ORDER_HEIGHT: usize = 16;

type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    size: usize,
    strategy: TraversalStrategy,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self::with_strategy(TraversalStrategy::default())
    }

    pub fn with_strategy(strategy: TraversalStrategy) -> Self {
        Self {
            root: None,
            size: 0,
            strategy,
        }
    }

    pub fn strategy(&self) -> TraversalStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: TraversalStrategy) {
        self.strategy = strategy;
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Height in edges: an empty tree is -1, a single node is 0.
    pub fn height(&self) -> isize {
        match self.strategy {
            TraversalStrategy::Recursive => Self::height_recursive(self.root.as_deref()),
            TraversalStrategy::Iterative => Self::height_iterative(self.root.as_deref()),
        }
    }

    fn height_recursive(node: Option<&TreeNode<T>>) -> isize {
        match node {
            None => -1,
            Some(node) => {
                let left = Self::height_recursive(node.left.as_deref());
                let right = Self::height_recursive(node.right.as_deref());
                left.max(right) + 1
            }
        }
    }

    fn height_iterative(root: Option<&TreeNode<T>>) -> isize {
        let mut height = -1;
        let mut level: Vec<&TreeNode<T>> = root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Insert a value; always succeeds.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(TreeNode::leaf(value));
        self.size += 1;
        tracing::debug!(size = self.size, "bst insert");
    }

    /// Delete one occurrence of `value`. Returns `false` (tree untouched)
    /// when the value is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let removed = Self::remove(&mut self.root, value);
        if removed {
            self.size -= 1;
        }
        tracing::debug!(removed, size = self.size, "bst delete");
        removed
    }

    fn remove(slot: &mut Link<T>, value: &T) -> bool {
        let node = match slot {
            Some(node) => node,
            None => return false,
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, value),
            Ordering::Greater => Self::remove(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    Self::replace_with_successor(node);
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *slot = child;
                }
                true
            }
        }
    }

    /// Overwrite `node` with its in-order successor and unlink the successor
    /// from the right subtree.
    fn replace_with_successor(node: &mut TreeNode<T>) {
        let successor = match Self::detach_min(&mut node.right) {
            Some(successor) => successor,
            None => return,
        };
        let TreeNode {
            value,
            left: duplicates,
            ..
        } = *successor;
        node.value = value;
        // copies of the successor value must live left of it
        if let Some(duplicates) = duplicates {
            Self::attach_rightmost(&mut node.left, duplicates);
        }
    }

    /// Unlink the topmost node holding the subtree minimum. Its left subtree
    /// (only copies of that minimum) stays attached to it; its right subtree
    /// takes its place.
    fn detach_min(slot: &mut Link<T>) -> Link<T> {
        let depth = {
            let mut path = Vec::new();
            let mut cur = slot.as_deref();
            while let Some(node) = cur {
                path.push(&node.value);
                cur = node.left.as_deref();
            }
            let min = *path.last()?;
            path.iter().position(|value| *value == min)?
        };

        let mut cur = slot;
        for _ in 0..depth {
            cur = match cur {
                Some(node) => &mut node.left,
                None => return None,
            };
        }
        let mut node = cur.take()?;
        *cur = node.right.take();
        Some(node)
    }

    fn attach_rightmost(slot: &mut Link<T>, subtree: Box<TreeNode<T>>) {
        let mut cur = slot;
        while let Some(node) = cur {
            cur = &mut node.right;
        }
        *cur = Some(subtree);
    }

    /// Descend from the root; O(height).
    pub fn search(&self, value: &T) -> Option<&T> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Check `left <= node < right` for every node.
    pub fn is_ordered(&self) -> bool {
        // (node, exclusive lower bound, inclusive upper bound)
        let mut stack: Vec<(&TreeNode<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();

        while let Some((node, lower, upper)) = stack.pop() {
            if lower.is_some_and(|lower| node.value <= *lower)
                || upper.is_some_and(|upper| node.value > *upper)
            {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, lower, Some(&node.value)));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some(&node.value), upper));
            }
        }
        true
    }
}

impl<T: Clone> BinarySearchTree<T> {
    /// Breadth-first snapshot in binary-heap layout: the children of slot `i`
    /// are `2i + 1` and `2i + 2`, absent nodes are `None`, and the vector ends
    /// at the last real node.
    ///
    /// The layout holds up to 2^(height + 1) - 1 slots, so trees taller than
    /// [`MAX_LEVEL_ORDER_HEIGHT`] are refused with `SnapshotTooDeep`.
    pub fn level_order(&self) -> Result<Vec<Option<T>>> {
        self.level_order_bounded(MAX_LEVEL_ORDER_HEIGHT)
    }

    /// [`level_order`](Self::level_order) with a tighter height limit.
    /// `limit` is clamped to [`MAX_LEVEL_ORDER_HEIGHT`].
    pub fn level_order_bounded(&self, limit: usize) -> Result<Vec<Option<T>>> {
        let limit = limit.min(MAX_LEVEL_ORDER_HEIGHT);
        let height = self.height();
        if height > 0 && height as usize > limit {
            return Err(DsError::SnapshotTooDeep {
                height: height as usize,
                limit,
            });
        }
        Ok(self.heap_layout())
    }

    // callers guarantee height <= MAX_LEVEL_ORDER_HEIGHT
    fn heap_layout(&self) -> Vec<Option<T>> {
        let mut placed: Vec<(usize, &T)> = Vec::with_capacity(self.size);
        let mut stack: Vec<(&TreeNode<T>, usize)> = self
            .root
            .as_deref()
            .map(|root| (root, 0))
            .into_iter()
            .collect();

        while let Some((node, index)) = stack.pop() {
            placed.push((index, &node.value));
            if let Some(left) = node.left.as_deref() {
                stack.push((left, 2 * index + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, 2 * index + 2));
            }
        }

        let len = placed.iter().map(|(index, _)| index + 1).max().unwrap_or(0);
        let mut snapshot = vec![None; len];
        for (index, value) in placed {
            snapshot[index] = Some(value.clone());
        }
        snapshot
    }

    pub fn pre_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        match self.strategy {
            TraversalStrategy::Recursive => Self::pre_order_recursive(self.root.as_deref(), &mut out),
            TraversalStrategy::Iterative => Self::pre_order_iterative(self.root.as_deref(), &mut out),
        }
        out
    }

    pub fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        match self.strategy {
            TraversalStrategy::Recursive => Self::in_order_recursive(self.root.as_deref(), &mut out),
            TraversalStrategy::Iterative => Self::in_order_iterative(self.root.as_deref(), &mut out),
        }
        out
    }

    pub fn post_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        match self.strategy {
            TraversalStrategy::Recursive => Self::post_order_recursive(self.root.as_deref(), &mut out),
            TraversalStrategy::Iterative => Self::post_order_iterative(self.root.as_deref(), &mut out),
        }
        out
    }

    fn pre_order_recursive(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            out.push(node.value.clone());
            Self::pre_order_recursive(node.left.as_deref(), out);
            Self::pre_order_recursive(node.right.as_deref(), out);
        }
    }

    fn in_order_recursive(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            Self::in_order_recursive(node.left.as_deref(), out);
            out.push(node.value.clone());
            Self::in_order_recursive(node.right.as_deref(), out);
        }
    }

    fn post_order_recursive(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            Self::post_order_recursive(node.left.as_deref(), out);
            Self::post_order_recursive(node.right.as_deref(), out);
            out.push(node.value.clone());
        }
    }

    fn pre_order_iterative(root: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }

    fn in_order_iterative(root: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        let mut stack: Vec<&TreeNode<T>> = Vec::new();
        let mut cur = root;
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push(node.value.clone());
                    cur = node.right.as_deref();
                }
                None => break,
            }
        }
    }

    fn post_order_iterative(root: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        // node-right-left, reversed
        let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
        let mut reversed = Vec::new();
        while let Some(node) = stack.pop() {
            reversed.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.extend(reversed.into_iter().rev().map(|node| node.value.clone()));
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Structure for BinarySearchTree<T> {
    fn type_name(&self) -> &'static str {
        "BinarySearchTree"
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self);
    }
}
