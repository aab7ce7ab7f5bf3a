//! Owned workspace holding one instance of every structure
//!
//! A [`Session`] replaces the process-wide structures a UI would otherwise
//! mutate: the embedding application creates one, passes it by reference to
//! its handlers, and asks it for a [`SessionSnapshot`] to render. Nothing in
//! here is shared across threads; callers that need that wrap the session in
//! their own lock.

use crate::config::DsvizConfig;
use crate::error::{DsError, Result};
use crate::graph::{GraphSnapshot, WeightedGraph};
use crate::structures::{
    BinarySearchTree, CircularList, DynamicArray, Queue, Stack, Structure,
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Session<T> {
    config: DsvizConfig,
    stack: Stack<T>,
    queue: Queue<T>,
    array: DynamicArray<T>,
    list: CircularList<T>,
    tree: BinarySearchTree<T>,
    graph: WeightedGraph<String>,
}

/// Everything a renderer needs, detached from the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot<T> {
    /// (position, value) with position 0 at the top
    pub stack: Vec<(usize, T)>,
    /// (position, value) with position 0 at the front
    pub queue: Vec<(usize, T)>,
    pub array: Vec<(usize, T)>,
    pub array_sorted: bool,
    pub circular_list: Vec<(usize, T)>,
    /// Level-order layout, `None` when the tree is taller than the configured
    /// snapshot height
    pub tree: Option<Vec<Option<T>>>,
    pub tree_height: isize,
    pub graph: GraphSnapshot<String>,
}

impl<T> Session<T> {
    pub fn new(config: DsvizConfig) -> Self {
        let tree = BinarySearchTree::with_strategy(config.tree.traversal);
        tracing::debug!(traversal = %config.tree.traversal, "session created");
        Self {
            config,
            stack: Stack::new(),
            queue: Queue::new(),
            array: DynamicArray::new(),
            list: CircularList::new(),
            tree,
            graph: WeightedGraph::new(),
        }
    }

    pub fn config(&self) -> &DsvizConfig {
        &self.config
    }

    pub fn stack(&self) -> &Stack<T> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack<T> {
        &mut self.stack
    }

    pub fn queue(&self) -> &Queue<T> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Queue<T> {
        &mut self.queue
    }

    pub fn array(&self) -> &DynamicArray<T> {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut DynamicArray<T> {
        &mut self.array
    }

    pub fn circular_list(&self) -> &CircularList<T> {
        &self.list
    }

    pub fn circular_list_mut(&mut self) -> &mut CircularList<T> {
        &mut self.list
    }

    pub fn tree(&self) -> &BinarySearchTree<T> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut BinarySearchTree<T> {
        &mut self.tree
    }

    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut WeightedGraph<String> {
        &mut self.graph
    }

    /// Element count per structure, in a fixed order
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let structures: [&dyn Structure; 6] = [
            &self.stack,
            &self.queue,
            &self.array,
            &self.list,
            &self.tree,
            &self.graph,
        ];
        structures
            .iter()
            .map(|s| (s.type_name(), s.len()))
            .collect()
    }

    /// Empty every structure; the configuration is kept
    pub fn clear_all(&mut self) {
        let structures: [&mut dyn Structure; 6] = [
            &mut self.stack,
            &mut self.queue,
            &mut self.array,
            &mut self.list,
            &mut self.tree,
            &mut self.graph,
        ];
        for structure in structures {
            structure.clear();
        }
        tracing::info!("session cleared");
    }
}

impl<T: Clone> Session<T> {
    /// Level-order snapshot of the tree, refused when the tree is taller than
    /// `tree.max_snapshot_height`.
    pub fn tree_level_order(&self) -> Result<Vec<Option<T>>> {
        self.tree
            .level_order_bounded(self.config.tree.max_snapshot_height)
    }

    pub fn snapshot(&self) -> SessionSnapshot<T> {
        let tree = match self.tree_level_order() {
            Ok(levels) => Some(levels),
            Err(DsError::SnapshotTooDeep { height, limit }) => {
                tracing::warn!(height, limit, "tree too deep for level-order snapshot");
                None
            }
            Err(_) => None,
        };

        SessionSnapshot {
            stack: self.stack.to_display_list(),
            queue: self.queue.to_display_list(),
            array: self.array.to_display_list(),
            array_sorted: self.array.is_sorted(),
            circular_list: self.list.to_display_list(),
            tree,
            tree_height: self.tree.height(),
            graph: self.graph.snapshot(),
        }
    }
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self::new(DsvizConfig::default())
    }
}
