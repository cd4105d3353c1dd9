//! Prim's minimum spanning tree over a dense weight matrix.
//!
//! A zero entry means "no edge". The tree grows from vertex 0: a
//! [`MinQueue`] keyed by the cheapest known connecting weight picks the next
//! vertex, and entries for vertices already in the tree are skipped when
//! they surface.
//!
//! Only the tree containing vertex 0 is built; vertices in other components
//! keep no parent and no key.

use super::MstEdge;
use crate::collections::{DenseMatrix, MinQueue};
use crate::error::{GraphError, GraphResult};
use crate::graph::access::VisitedSet;
use crate::graph::{EdgeType, Graph};
use crate::weight::{improves, Weight};
use serde::{Deserialize, Serialize};

/// Parent pointers of the tree grown by Prim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimTree<W> {
    /// `parent[v]` is the tree neighbor `v` was attached through; `None` for
    /// the root and for vertices outside the root's component.
    pub parent: Vec<Option<usize>>,
    /// `key[v]` is the weight of the edge to `parent[v]` (zero for the root,
    /// `None` for vertices never reached).
    pub key: Vec<Option<W>>,
}

impl<W: Weight> PrimTree<W> {
    /// Returns the tree edges as `(parent, child, weight)` in vertex order.
    pub fn edges(&self) -> Vec<MstEdge<W>> {
        self.parent
            .iter()
            .zip(&self.key)
            .enumerate()
            .filter_map(|(v, (parent, key))| Some(MstEdge::new((*parent)?, v, (*key)?)))
            .collect()
    }

    /// Sum of the tree edge weights (saturating).
    pub fn total_weight(&self) -> W {
        self.edges()
            .iter()
            .fold(W::zero(), |acc, e| acc.saturating_add(e.weight))
    }

    /// Returns `true` if every vertex was attached to the tree.
    pub fn spans_all(&self) -> bool {
        self.key.iter().all(Option::is_some)
    }
}

/// Computes a minimum spanning tree rooted at vertex 0.
///
/// Runs in `O(V² log V)` on the dense matrix. The matrix must be square;
/// a zero entry is read as "no edge".
///
/// # Errors
/// Returns [`GraphError::NotSquare`] if the matrix is not square.
pub fn prim<W: Weight>(matrix: &DenseMatrix<W>) -> GraphResult<PrimTree<W>> {
    if !matrix.is_square() {
        return Err(GraphError::NotSquare {
            rows: matrix.rows(),
            row: 0,
            len: matrix.cols(),
        });
    }

    Ok(grow(matrix))
}

/// Runs [`prim`] over nested rows, e.g. `&[[0, 2], [2, 0]]`.
///
/// # Errors
/// Returns [`GraphError::NotSquare`] naming the first malformed row.
pub fn prim_rows<W, R>(rows: &[R]) -> GraphResult<PrimTree<W>>
where
    W: Weight,
    R: AsRef<[W]>,
{
    let matrix = DenseMatrix::try_from_rows(rows).map_err(|(row, len)| GraphError::NotSquare {
        rows: rows.len(),
        row,
        len,
    })?;
    if !matrix.is_square() {
        return Err(GraphError::NotSquare {
            rows: rows.len(),
            row: 0,
            len: matrix.cols(),
        });
    }
    prim(&matrix)
}

/// Runs [`prim`] over `graph`, ignoring edge direction.
///
/// Parallel edges collapse to the cheapest one. Zero-weight edges cannot be
/// expressed in the dense encoding and are dropped, as are self-loops.
pub fn prim_graph<L, W, Ty>(graph: &Graph<L, W, Ty>) -> PrimTree<W>
where
    W: Weight,
    Ty: EdgeType,
{
    let n = graph.vertex_count();
    let mut matrix = DenseMatrix::square(n, W::zero());
    for edge in graph.edges() {
        let (u, v) = (edge.source.index(), edge.destination.index());
        if u == v {
            continue;
        }
        let current = matrix[(u, v)];
        if current == W::zero() || edge.weight < current {
            matrix[(u, v)] = edge.weight;
            matrix[(v, u)] = edge.weight;
        }
    }

    grow(&matrix)
}

/// Grows the tree from vertex 0 over a square matrix.
fn grow<W: Weight>(matrix: &DenseMatrix<W>) -> PrimTree<W> {
    let n = matrix.rows();
    let mut tree = PrimTree {
        parent: vec![None; n],
        key: vec![None; n],
    };
    if n == 0 {
        return tree;
    }

    log_debug!(vertices = n, "prim");

    let mut in_tree = VisitedSet::new(n);
    let mut queue = MinQueue::with_capacity(n);
    tree.key[0] = Some(W::zero());
    queue.push(W::zero(), 0usize);

    while let Some((_, u)) = queue.pop() {
        if !in_tree.try_visit(u) {
            continue;
        }
        for (v, &weight) in matrix.row(u).into_iter().flatten().enumerate() {
            if weight != W::zero() && !in_tree.is_visited(v) && improves(weight, tree.key[v]) {
                tree.key[v] = Some(weight);
                tree.parent[v] = Some(u);
                queue.push(weight, v);
            }
        }
    }

    log_debug!(attached = in_tree.count(), "prim finished");
    tree
}
