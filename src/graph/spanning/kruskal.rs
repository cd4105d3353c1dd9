//! Kruskal's minimum spanning forest.
//!
//! Edges are sorted by weight with a stable sort, so among equal weights the
//! input order decides and the output is deterministic. A [`DisjointSet`]
//! rejects every edge whose endpoints are already connected.

use super::MstEdge;
use crate::collections::DisjointSet;
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeType, Graph, Vertex};
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// The edges selected by Kruskal, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest<W> {
    /// Selected edges, lightest first.
    pub edges: Vec<MstEdge<W>>,
    /// Sum of the selected weights (saturating).
    pub total_weight: W,
}

impl<W> SpanningForest<W> {
    /// Returns `true` if the forest is a single tree spanning `vertex_count`
    /// vertices.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count.max(1)
    }

    /// Number of trees in the forest over `vertex_count` vertices.
    ///
    /// A `vertex_count` smaller than the forest reports zero trees.
    pub fn tree_count(&self, vertex_count: usize) -> usize {
        vertex_count.saturating_sub(self.edges.len())
    }
}

/// Computes a minimum spanning forest of `vertex_count` vertices.
///
/// Runs in `O(E log E)`. The result is a forest when the graph is
/// disconnected.
///
/// # Errors
/// Returns [`GraphError::UnknownVertex`] if an edge endpoint is not below
/// `vertex_count`.
pub fn kruskal<W: Weight>(edges: &[MstEdge<W>], vertex_count: usize) -> GraphResult<SpanningForest<W>> {
    if let Some(bad) = edges
        .iter()
        .flat_map(|e| [e.u, e.v])
        .find(|&endpoint| endpoint >= vertex_count)
    {
        return Err(GraphError::UnknownVertex {
            vertex: Vertex::new(bad),
            vertex_count,
        });
    }
    Ok(select(edges.iter().copied(), vertex_count))
}

/// Runs Kruskal over the logical edges of `graph`, ignoring direction.
pub fn kruskal_graph<L, W, Ty>(graph: &Graph<L, W, Ty>) -> SpanningForest<W>
where
    W: Weight,
    Ty: EdgeType,
{
    let edges = graph
        .edges()
        .iter()
        .map(|e| MstEdge::new(e.source.index(), e.destination.index(), e.weight));
    select(edges, graph.vertex_count())
}

fn select<W: Weight>(edges: impl Iterator<Item = MstEdge<W>>, vertex_count: usize) -> SpanningForest<W> {
    let mut sorted: Vec<MstEdge<W>> = edges.collect();
    // Stable: ties keep input order.
    sorted.sort_by_key(|e| e.weight);

    log_debug!(vertices = vertex_count, edges = sorted.len(), "kruskal");

    let mut ds = DisjointSet::with_len(vertex_count);
    let mut forest = SpanningForest {
        edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        total_weight: W::zero(),
    };

    for edge in sorted {
        if ds.union(edge.u, edge.v) {
            forest.total_weight = forest.total_weight.saturating_add(edge.weight);
            forest.edges.push(edge);
        } else {
            log_trace!(u = edge.u, v = edge.v, "kruskal: edge closes a cycle");
        }
    }

    log_debug!(selected = forest.edges.len(), total = %forest.total_weight, "kruskal finished");
    forest
}
