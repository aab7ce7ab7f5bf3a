use thiserror::Error;

pub type Result<T> = std::result::Result<T, DsError>;

/// Failures reported by the data-structure engines.
///
/// Every variant is an expected, recoverable condition. The payload carries
/// enough context for a caller to build its own message; the `Display`
/// strings are diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsError {
    #[error("cannot {operation} on empty {structure}")]
    EmptyStructure {
        structure: &'static str,
        operation: &'static str,
    },

    #[error("index {index} out of range for {operation} (length {len})")]
    IndexOutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid position {position} for {operation} (size {size})")]
    InvalidPosition {
        operation: &'static str,
        position: usize,
        size: usize,
    },

    #[error("precondition violated for {operation}: {reason}")]
    PreconditionViolated {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("vertex '{0}' already exists")]
    DuplicateVertex(String),

    #[error("vertex '{0}' does not exist")]
    UnknownVertex(String),

    #[error("edge '{from}' -- '{to}' already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("edge weight must be a positive integer, got {0}")]
    InvalidWeight(i64),

    #[error("need at least 2 vertices to compute a spanning tree, graph has {count}")]
    InsufficientVertices { count: usize },

    #[error("graph has no edges")]
    NoEdges,

    #[error("spanning forest weight overflows i64")]
    WeightOverflow,

    #[error("tree height {height} exceeds the snapshot limit of {limit}")]
    SnapshotTooDeep { height: usize, limit: usize },
}

/// Error category without payload, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyStructure,
    IndexOutOfRange,
    InvalidPosition,
    PreconditionViolated,
    DuplicateVertex,
    UnknownVertex,
    DuplicateEdge,
    InvalidWeight,
    InsufficientVertices,
    NoEdges,
    WeightOverflow,
    SnapshotTooDeep,
}

impl DsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DsError::EmptyStructure { .. } => ErrorKind::EmptyStructure,
            DsError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            DsError::InvalidPosition { .. } => ErrorKind::InvalidPosition,
            DsError::PreconditionViolated { .. } => ErrorKind::PreconditionViolated,
            DsError::DuplicateVertex(_) => ErrorKind::DuplicateVertex,
            DsError::UnknownVertex(_) => ErrorKind::UnknownVertex,
            DsError::DuplicateEdge { .. } => ErrorKind::DuplicateEdge,
            DsError::InvalidWeight(_) => ErrorKind::InvalidWeight,
            DsError::InsufficientVertices { .. } => ErrorKind::InsufficientVertices,
            DsError::NoEdges => ErrorKind::NoEdges,
            DsError::WeightOverflow => ErrorKind::WeightOverflow,
            DsError::SnapshotTooDeep { .. } => ErrorKind::SnapshotTooDeep,
        }
    }

    pub(crate) fn empty(structure: &'static str, operation: &'static str) -> Self {
        DsError::EmptyStructure {
            structure,
            operation,
        }
    }
}
