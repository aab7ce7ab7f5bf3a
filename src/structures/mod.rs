//! Linear and tree containers
//!
//! ## Available Structures
//!
//! ### Linear Structures
//! - **Stack**: LIFO (Last In, First Out) stack
//! - **Queue**: FIFO (First In, First Out) queue
//! - **DynamicArray**: index-addressed list with shell sort and binary search
//! - **CircularList**: singly-linked ring with positional insert/delete
//!
//! ### Tree Structures
//! - **BinarySearchTree**: plain, unbalanced BST (duplicates go left)
//!
//! ## Performance Characteristics
//!
//! - Stack/Queue operations: O(1) push/pop
//! - CircularList: O(1) push (cached tail), O(n) positional access
//! - BST operations: O(height), which is O(n) for sorted insertion order

pub mod array;
pub mod circular_list;
pub mod queue;
pub mod stack;
pub mod trees;

pub use array::DynamicArray;
pub use circular_list::CircularList;
pub use queue::Queue;
pub use stack::Stack;
pub use trees::{BinarySearchTree, TraversalStrategy, MAX_LEVEL_ORDER_HEIGHT};

/// Behaviour shared by every container a session owns.
pub trait Structure {
    /// Human readable name used in summaries and diagnostics
    fn type_name(&self) -> &'static str;

    /// Number of live elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_trait_objects() {
        let mut stack = Stack::new();
        stack.push(1);
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        let mut all: Vec<Box<dyn Structure>> = vec![Box::new(stack), Box::new(queue)];
        assert_eq!(all[0].type_name(), "Stack");
        assert_eq!(all[1].len(), 2);

        for s in all.iter_mut() {
            s.clear();
        }
        assert!(all.iter().all(|s| s.is_empty()));
    }
}
