//! In-memory engines behind a data-structure visualizer
//!
//! Every structure is a plain owned value with call-and-return operations and
//! read-only snapshot accessors for a renderer. Failures are reported through
//! [`DsError`].

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod session;
pub mod structures;

pub use config::{ConfigError, DsvizConfig};
pub use error::{DsError, ErrorKind, Result};
pub use graph::{Edge, MstStatus, SpanningForest, WeightedGraph};
pub use session::{Session, SessionSnapshot};
pub use structures::{
    BinarySearchTree, CircularList, DynamicArray, Queue, Stack, Structure, TraversalStrategy,
};
