//! Queue implementation
//!
//! FIFO (First In, First Out) queue: enqueue at the tail, dequeue at the head.

use super::Structure;
use crate::error::{DsError, Result};
use std::collections::VecDeque;
use std::fmt;

/// FIFO Queue using VecDeque for efficient front/back operations
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Create a queue from a list of values (head first)
    pub fn from_list(values: Vec<T>) -> Self {
        Self {
            data: values.into(),
        }
    }

    /// Add an element to the rear of the queue
    pub fn enqueue(&mut self, value: T) {
        self.data.push_back(value);
        tracing::debug!(size = self.data.len(), "queue enqueue");
    }

    /// Remove and return the element from the front of the queue
    pub fn dequeue(&mut self) -> Result<T> {
        let value = self
            .data
            .pop_front()
            .ok_or_else(|| DsError::empty("queue", "dequeue"))?;
        tracing::debug!(size = self.data.len(), "queue dequeue");
        Ok(value)
    }

    /// Peek at the front element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.data.front().ok_or_else(|| DsError::empty("queue", "peek"))
    }

    /// Peek at the rear element without removing it
    pub fn back(&self) -> Result<&T> {
        self.data.back().ok_or_else(|| DsError::empty("queue", "back"))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// `(position, value)` pairs from head (position 0) to tail
    pub fn to_display_list(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.data.iter().cloned().enumerate().collect()
    }

    /// Convert queue to a list (front to back)
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Structure for Queue<T> {
    fn type_name(&self) -> &'static str {
        "Queue"
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue[size: {}]", self.data.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("data", &self.data).finish()
    }
}
