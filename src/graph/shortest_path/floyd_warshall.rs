//! Floyd-Warshall all-pairs shortest paths.
//!
//! The table is seeded from direct edges. Parallel `u -> v` entries are not
//! merged: the last one in adjacency order (the last added) wins. The
//! diagonal starts at zero and a self-loop only replaces it when the loop
//! is negative, since the empty path from a vertex to itself always exists.
//!
//! Intermediates `k` are processed in vertex-index order. A pair is only
//! updated through `k` when both halves are finite and their sum does not
//! overflow.

use super::DistanceMap;
use crate::collections::DenseMatrix;
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeType, Graph, Vertex};
use crate::weight::{extend, improves, Weight};
use serde::{Deserialize, Serialize};

/// A `|V| x |V|` table of shortest distances; `None` is infinity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix<W> {
    matrix: DenseMatrix<Option<W>>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Number of vertices covered.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    /// Distance from `from` to `to`, `None` if unreachable or out of range.
    pub fn get(&self, from: Vertex, to: Vertex) -> Option<W> {
        self.matrix.get(from.index(), to.index()).copied().flatten()
    }

    /// Distances from `from` to every vertex.
    pub fn row(&self, from: Vertex) -> Option<&[Option<W>]> {
        self.matrix.row(from.index())
    }

    /// Distances from `from` as a [`DistanceMap`].
    pub fn distances_from(&self, from: Vertex) -> Option<DistanceMap<W>> {
        self.row(from)
            .map(|row| DistanceMap::from_parts(from, row.to_vec()))
    }

    /// Returns the underlying dense table.
    pub fn as_matrix(&self) -> &DenseMatrix<Option<W>> {
        &self.matrix
    }
}

/// Computes shortest distances between every ordered pair of vertices.
///
/// Runs in `O(V³)` time and `O(V²)` space. A non-negative self-loop never
/// replaces the zero diagonal, so `get(v, v)` agrees with single-source runs.
///
/// # Errors
/// Returns [`GraphError::NegativeCycle`] if any vertex ends up with a
/// negative distance to itself.
pub fn floyd_warshall<L, W, Ty>(graph: &Graph<L, W, Ty>) -> GraphResult<DistanceMatrix<W>>
where
    W: Weight,
    Ty: EdgeType,
{
    let n = graph.vertex_count();
    log_debug!(vertices = n, edges = graph.edge_count(), "floyd-warshall");

    let mut dist = DenseMatrix::square(n, None);
    for i in 0..n {
        dist[(i, i)] = Some(W::zero());
    }
    for edge in graph.all_edges() {
        let (i, j) = (edge.source.index(), edge.destination.index());
        if i != j || edge.weight < W::zero() {
            dist[(i, j)] = Some(edge.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[(i, k)].is_none() {
                continue;
            }
            for j in 0..n {
                let (Some(ik), Some(kj)) = (dist[(i, k)], dist[(k, j)]) else {
                    continue;
                };
                let Some(candidate) = extend(ik, kj) else {
                    continue;
                };
                if improves(candidate, dist[(i, j)]) {
                    dist[(i, j)] = Some(candidate);
                }
            }
        }
    }

    if (0..n).any(|i| dist[(i, i)].is_some_and(|d| d < W::zero())) {
        log_warn!(vertices = n, "negative cycle in all-pairs table");
        return Err(GraphError::NegativeCycle);
    }

    Ok(DistanceMatrix { matrix: dist })
}
