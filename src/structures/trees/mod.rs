//! Tree structures

pub mod bst;

pub use bst::{BinarySearchTree, MAX_LEVEL_ORDER_HEIGHT};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How traversals and height are computed.
///
/// Both strategies yield identical results; `Iterative` uses explicit stacks
/// and queues so degenerate (list-shaped) trees cannot exhaust the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalStrategy {
    #[default]
    Recursive,
    Iterative,
}

impl FromStr for TraversalStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(TraversalStrategy::Recursive),
            "iterative" => Ok(TraversalStrategy::Iterative),
            other => Err(format!("unknown traversal strategy '{}'", other)),
        }
    }
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalStrategy::Recursive => write!(f, "recursive"),
            TraversalStrategy::Iterative => write!(f, "iterative"),
        }
    }
}
