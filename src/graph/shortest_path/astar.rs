//! A* search between two vertices.
//!
//! The open set is a [`MinQueue`] ordered by `f = g + h`, where `g` is the
//! cost from the start and `h` the caller's estimate of the remaining cost.
//! Entries with equal `f` pop in insertion order. A vertex is closed on its
//! first expansion and never expanded again.
//!
//! # Contract
//! - Edge weights must be non-negative and the heuristic must never return
//!   a negative value. Neither is checked.
//! - The returned path is optimal only if the heuristic is *admissible*
//!   (never overestimates the true remaining cost). A heuristic that always
//!   returns zero reduces A* to Dijkstra.

use super::Path;
use crate::collections::MinQueue;
use crate::graph::access::VisitedSet;
use crate::graph::{EdgeType, Graph, Vertex};
use crate::weight::{extend, improves, Weight};

/// Finds the lowest-cost path from `start` to `goal`.
///
/// `heuristic(current, goal)` estimates the cost from `current` to `goal`.
/// Returns `None` when the open set runs dry before `goal` is reached, or
/// when either endpoint is not in the graph.
pub fn astar<L, W, Ty, H>(
    graph: &Graph<L, W, Ty>,
    start: Vertex,
    goal: Vertex,
    mut heuristic: H,
) -> Option<Path<W>>
where
    W: Weight,
    Ty: EdgeType,
    H: FnMut(Vertex, Vertex) -> W,
{
    if !graph.contains_vertex(start) || !graph.contains_vertex(goal) {
        return None;
    }

    let n = graph.vertex_count();
    let mut g_score: Vec<Option<W>> = vec![None; n];
    let mut came_from: Vec<Option<Vertex>> = vec![None; n];
    let mut closed = VisitedSet::new(n);
    let mut open = MinQueue::new();

    log_debug!(start = start.index(), goal = goal.index(), vertices = n, "astar");

    g_score[start.index()] = Some(W::zero());
    open.push(heuristic(start, goal), start);

    while let Some((_, current)) = open.pop() {
        if current == goal {
            log_debug!(expanded = closed.count(), "astar reached goal");
            return g_score[goal.index()].map(|cost| Path {
                vertices: reconstruct(&came_from, goal),
                cost,
            });
        }
        if !closed.try_visit(current.index()) {
            continue;
        }
        let Some(g_current) = g_score[current.index()] else {
            continue;
        };

        for edge in graph.neighbors(current) {
            let neighbor = edge.destination;
            if closed.is_visited(neighbor.index()) {
                continue;
            }
            let Some(tentative) = extend(g_current, edge.weight) else {
                continue;
            };
            if improves(tentative, g_score[neighbor.index()]) {
                came_from[neighbor.index()] = Some(current);
                g_score[neighbor.index()] = Some(tentative);
                let f = extend(tentative, heuristic(neighbor, goal)).unwrap_or_else(W::max_value);
                open.push(f, neighbor);
            }
        }
    }

    log_debug!(expanded = closed.count(), "astar found no path");
    None
}

/// Like [`astar`], returning only the vertex sequence; empty when there is
/// no path.
pub fn astar_path<L, W, Ty, H>(graph: &Graph<L, W, Ty>, start: Vertex, goal: Vertex, heuristic: H) -> Vec<Vertex>
where
    W: Weight,
    Ty: EdgeType,
    H: FnMut(Vertex, Vertex) -> W,
{
    astar(graph, start, goal, heuristic).map_or_else(Vec::new, |path| path.vertices)
}

fn reconstruct(came_from: &[Option<Vertex>], goal: Vertex) -> Vec<Vertex> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current.index()] {
        // Bounded by the vertex count; a closed vertex is never re-parented.
        if path.len() > came_from.len() {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
