//! Circular singly-linked list
//!
//! Nodes live in an index arena (`Vec<Option<Node>>` plus a free list) and
//! link to their successor by slot index, so the tail-to-head link that closes
//! the ring is just another index and no ownership cycle exists. The tail slot
//! is cached, which makes `push` O(1).
//!
//! Ring invariant: following `next` exactly `size` times from `head` returns
//! to `head`; `size == 0` iff `head` and `tail` are `None`.

use super::Structure;
use crate::error::{DsError, Result};
use std::fmt;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: usize,
}

#[derive(Clone)]
pub struct CircularList<T> {
    slots: Vec<Option<Node<T>>>,
    free_indices: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_indices: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Value stored at the head, if any
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// Append after the current tail
    pub fn push(&mut self, value: T) {
        let idx = self.allocate(value);
        match self.tail {
            None => {
                // a single node is its own successor
                self.node_mut(idx).next = idx;
                self.head = Some(idx);
            }
            Some(tail) => {
                let head = self.head.unwrap_or(idx);
                self.node_mut(idx).next = head;
                self.node_mut(tail).next = idx;
            }
        }
        self.tail = Some(idx);
        self.size += 1;
        self.check_ring();
        tracing::debug!(size = self.size, "circular list push");
    }

    /// Insert so that the new value ends up at `position` (0..=size).
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        if position > self.size {
            return Err(DsError::InvalidPosition {
                operation: "insert_at",
                position,
                size: self.size,
            });
        }
        if position == self.size {
            self.push(value);
            return Ok(());
        }

        let idx = self.allocate(value);
        match (self.head, self.tail) {
            (Some(head), Some(tail)) if position == 0 => {
                self.node_mut(idx).next = head;
                self.node_mut(tail).next = idx;
                self.head = Some(idx);
            }
            (Some(head), Some(_)) => {
                let prev = self.walk_index(head, position - 1);
                let after = self.node(prev).next;
                self.node_mut(idx).next = after;
                self.node_mut(prev).next = idx;
            }
            _ => unreachable!("non-empty list without head or tail"),
        }
        self.size += 1;
        self.check_ring();
        tracing::debug!(position, size = self.size, "circular list insert");
        Ok(())
    }

    /// Remove and return the head value
    pub fn pop(&mut self) -> Result<T> {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Err(DsError::empty("circular list", "pop")),
        };

        if self.size == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let new_head = self.node(head).next;
            self.node_mut(tail).next = new_head;
            self.head = Some(new_head);
        }
        self.size -= 1;
        let value = self.release(head);
        self.check_ring();
        tracing::debug!(size = self.size, "circular list pop");
        Ok(value)
    }

    /// Remove and return the value at `position` (0..size)
    pub fn delete_at(&mut self, position: usize) -> Result<T> {
        if position >= self.size {
            return Err(DsError::InvalidPosition {
                operation: "delete_at",
                position,
                size: self.size,
            });
        }
        if position == 0 {
            return self.pop();
        }

        let head = match self.head {
            Some(head) => head,
            None => return Err(DsError::empty("circular list", "delete_at")),
        };
        let prev = self.walk_index(head, position - 1);
        let target = self.node(prev).next;
        let after = self.node(target).next;
        self.node_mut(prev).next = after;
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.size -= 1;
        let value = self.release(target);
        self.check_ring();
        tracing::debug!(position, size = self.size, "circular list delete");
        Ok(value)
    }

    /// Value at `position`, or `None` when out of range
    pub fn get_at(&self, position: usize) -> Option<&T> {
        if position >= self.size {
            return None;
        }
        let head = self.head?;
        Some(&self.node(self.walk_index(head, position)).value)
    }

    /// Value reached after following `next` `steps` times from head.
    ///
    /// Unlike [`get_at`](Self::get_at) this wraps around the ring, so
    /// `walk(size)` is the head again.
    pub fn walk(&self, steps: usize) -> Option<&T> {
        let head = self.head?;
        Some(&self.node(self.walk_index(head, steps % self.size)).value)
    }

    /// Values from head once around the ring
    pub fn traverse(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    pub fn to_display_list(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.traverse().cloned().enumerate().collect()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_indices.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    fn walk_index(&self, start: usize, steps: usize) -> usize {
        (0..steps).fold(start, |idx, _| self.node(idx).next)
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match self.slots.get(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling circular list link {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.slots.get_mut(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling circular list link {idx}"),
        }
    }

    fn allocate(&mut self, value: T) -> usize {
        let node = Some(Node { value, next: usize::MAX });
        if let Some(idx) = self.free_indices.pop() {
            self.slots[idx] = node;
            idx
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> T {
        let node = self.slots[idx].take();
        self.free_indices.push(idx);
        match node {
            Some(node) => node.value,
            None => unreachable!("released an empty slot {idx}"),
        }
    }

    fn check_ring(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                debug_assert_eq!(self.walk_index(head, self.size), head);
                debug_assert_eq!(self.node(tail).next, head);
            }
            _ => debug_assert_eq!(self.size, 0),
        }
    }
}

/// Iterator over one revolution of a [`CircularList`].
///
/// Termination compares slot identity with the head slot, never values, so
/// repeated values cannot end the walk early.
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let list = self.list;
        let node = list.node(idx);
        self.current = if Some(node.next) == list.head {
            None
        } else {
            Some(node.next)
        };
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Structure for CircularList<T> {
    fn type_name(&self) -> &'static str {
        "CircularList"
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        CircularList::clear(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.traverse()).finish()
    }
}
