//! Minimum spanning trees and forests.
//!
//! [`kruskal`] works on an edge list and may return a forest when the input
//! is disconnected. [`prim`] works on a dense weight matrix and grows a
//! single tree from vertex 0.

pub mod kruskal;
pub mod prim;

pub use kruskal::{kruskal, kruskal_graph, SpanningForest};
pub use prim::{prim, prim_graph, prim_rows, PrimTree};

use serde::{Deserialize, Serialize};

/// An undirected edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MstEdge<W> {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W> MstEdge<W> {
    /// Creates an edge.
    pub const fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

impl<W> From<(usize, usize, W)> for MstEdge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self { u, v, weight }
    }
}
