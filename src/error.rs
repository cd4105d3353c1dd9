//! Error type shared by the fallible graph algorithms.

use crate::graph::Vertex;
use core::fmt;

/// The error type for graph construction and algorithm failures.
///
/// Only conditions that make a result meaningless are errors. An unreachable
/// vertex (infinite distance) and a missing A* path are ordinary results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A negative-weight cycle was found; no distance is authoritative.
    NegativeCycle,
    /// A vertex handle or index does not belong to the graph.
    UnknownVertex {
        /// The offending vertex.
        vertex: Vertex,
        /// Number of vertices in the graph at the time of the call.
        vertex_count: usize,
    },
    /// A graph description refers to a label that was never declared.
    UnknownLabel(String),
    /// A dense weight matrix has a row whose length differs from the row count.
    NotSquare {
        /// Number of rows in the matrix.
        rows: usize,
        /// Index of the first malformed row.
        row: usize,
        /// Length of that row.
        len: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCycle => f.write_str("negative weight cycle detected"),
            Self::UnknownVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {} is not in the graph ({} vertices)",
                vertex.index(),
                vertex_count
            ),
            Self::UnknownLabel(label) => write!(f, "unknown vertex label `{label}`"),
            Self::NotSquare { rows, row, len } => write!(
                f,
                "weight matrix is not square: row {row} has {len} entries, expected {rows}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
