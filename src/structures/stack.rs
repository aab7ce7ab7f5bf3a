//! Stack implementation
//!
//! LIFO (Last In, First Out) stack backed by a `Vec`, top at the end.

use super::Structure;
use crate::error::{DsError, Result};
use std::fmt;

/// LIFO Stack
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a stack from a list of values (bottom to top)
    pub fn from_list(values: Vec<T>) -> Self {
        Self { data: values }
    }

    /// Push an element onto the top of the stack
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        tracing::debug!(size = self.data.len(), "stack push");
    }

    /// Pop and return the top element from the stack
    pub fn pop(&mut self) -> Result<T> {
        let value = self.data.pop().ok_or_else(|| DsError::empty("stack", "pop"))?;
        tracing::debug!(size = self.data.len(), "stack pop");
        Ok(value)
    }

    /// Peek at the top element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.data.last().ok_or_else(|| DsError::empty("stack", "peek"))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear all elements from the stack
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().rev()
    }

    /// `(position, value)` pairs from top (position 0) to bottom
    pub fn to_display_list(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.iter().cloned().enumerate().collect()
    }

    /// Convert stack to a list (bottom to top)
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Structure for Stack<T> {
    fn type_name(&self) -> &'static str {
        "Stack"
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack[size: {}]", self.data.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("data", &self.data).finish()
    }
}
