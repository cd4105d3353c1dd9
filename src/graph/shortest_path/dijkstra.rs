//! Dijkstra's single-source shortest paths.
//!
//! # Precondition
//! Every edge weight must be non-negative. This is **not** checked: with a
//! negative edge the result is unspecified (though the call still
//! terminates). Use [`bellman_ford`](super::bellman_ford) for such graphs.
//!
//! # Algorithm
//! A min-priority queue keyed by tentative distance. Improvements are
//! re-inserted instead of decreasing keys in place; when an entry for an
//! already finalized vertex surfaces it is skipped, because the first
//! extraction of a vertex carries its final distance.

use super::{Path, ShortestPaths};
use crate::collections::MinQueue;
use crate::graph::access::VisitedSet;
use crate::graph::{EdgeType, Graph, Vertex};
use crate::weight::{extend, improves, Weight};

/// Computes shortest distances from `start` to every vertex.
///
/// Unreached vertices keep an infinite (`None`) distance. A `start` outside
/// the graph reaches nothing.
pub fn dijkstra<L, W, Ty>(graph: &Graph<L, W, Ty>, start: Vertex) -> ShortestPaths<W>
where
    W: Weight,
    Ty: EdgeType,
{
    run(graph, start, None)
}

/// Computes one shortest path from `start` to `goal`.
///
/// Stops as soon as `goal` is finalized. Returns `None` if `goal` is
/// unreachable.
pub fn dijkstra_path<L, W, Ty>(graph: &Graph<L, W, Ty>, start: Vertex, goal: Vertex) -> Option<Path<W>>
where
    W: Weight,
    Ty: EdgeType,
{
    run(graph, start, Some(goal)).path_to(goal)
}

fn run<L, W, Ty>(graph: &Graph<L, W, Ty>, start: Vertex, goal: Option<Vertex>) -> ShortestPaths<W>
where
    W: Weight,
    Ty: EdgeType,
{
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::new(start, n);
    let mut finalized = VisitedSet::new(n);
    let mut queue = MinQueue::with_capacity(n);

    log_debug!(
        vertices = n,
        edges = graph.edge_count(),
        start = start.index(),
        "dijkstra"
    );

    if graph.contains_vertex(start) {
        queue.push(W::zero(), start);
    }

    while let Some((distance, u)) = queue.pop() {
        if !finalized.try_visit(u.index()) {
            // Stale entry: `u` was already extracted at a smaller distance.
            continue;
        }
        if goal == Some(u) {
            break;
        }

        for edge in graph.neighbors(u) {
            let v = edge.destination.index();
            if finalized.is_visited(v) {
                continue;
            }
            let Some(candidate) = extend(distance, edge.weight) else {
                continue;
            };
            if improves(candidate, paths.distances.slot(v)) {
                log_trace!(from = u.index(), to = v, distance = %candidate, "relax");
                paths.distances.set(v, candidate);
                paths.predecessors.set(edge.destination, u);
                queue.push(candidate, edge.destination);
            }
        }
    }

    log_debug!(reached = finalized.count(), "dijkstra finished");
    paths
}
