//! Bellman-Ford single-source shortest paths with negative-cycle detection.
//!
//! Runs at most `|V| - 1` relaxation passes over every adjacency entry, then
//! one detection pass. An edge is only relaxed out of a vertex with a finite
//! distance, so infinity never takes part in an addition.
//!
//! Passes stop early once a full pass changes nothing; the remaining passes
//! could not change anything either.

use super::ShortestPaths;
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeType, Graph, Vertex, WeightedEdge};
use crate::weight::{extend, improves, Weight};

/// Computes shortest distances from `start`, allowing negative weights.
///
/// # Errors
/// Returns [`GraphError::NegativeCycle`] if a negative-weight cycle is
/// reachable from `start`. No partial distances are returned in that case.
pub fn bellman_ford<L, W, Ty>(graph: &Graph<L, W, Ty>, start: Vertex) -> GraphResult<ShortestPaths<W>>
where
    W: Weight,
    Ty: EdgeType,
{
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::new(start, n);

    log_debug!(
        vertices = n,
        edges = graph.edge_count(),
        start = start.index(),
        "bellman-ford"
    );

    for _ in 1..n {
        let mut changed = false;
        for edge in graph.all_edges() {
            if let Some(candidate) = relaxation(&paths, edge) {
                paths.distances.set(edge.destination.index(), candidate);
                paths.predecessors.set(edge.destination, edge.source);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    if graph.all_edges().any(|edge| relaxation(&paths, edge).is_some()) {
        log_warn!(start = start.index(), "negative cycle reachable from start");
        return Err(GraphError::NegativeCycle);
    }

    log_debug!(reached = paths.distances.reachable().count(), "bellman-ford finished");
    Ok(paths)
}

/// The improved distance for `edge.destination`, if `edge` relaxes.
#[inline]
fn relaxation<W: Weight>(paths: &ShortestPaths<W>, edge: &WeightedEdge<W>) -> Option<W> {
    let from = paths.distances.slot(edge.source.index())?;
    let candidate = extend(from, edge.weight)?;
    improves(candidate, paths.distances.slot(edge.destination.index())).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_edges_without_cycle() {
        let mut g: Graph<&str, i32> = Graph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        let c = g.add_vertex("C");
        let d = g.add_vertex("D");
        g.add_edge(a, b, 4);
        g.add_edge(a, c, 5);
        g.add_edge(b, c, -3);
        g.add_edge(c, d, 4);

        let paths = bellman_ford(&g, a).unwrap();
        assert_eq!(paths.distance(b), Some(4));
        assert_eq!(paths.distance(c), Some(1));
        assert_eq!(paths.distance(d), Some(5));
        assert_eq!(paths.path_to(d).unwrap().vertices, vec![a, b, c, d]);
    }

    #[test]
    fn test_negative_cycle_detected() {
        let mut g: Graph<&str, i32> = Graph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        let c = g.add_vertex("C");
        let d = g.add_vertex("D");
        g.add_edge(a, b, 4);
        g.add_edge(a, c, 5);
        g.add_edge(b, c, -3);
        g.add_edge(c, d, 4);
        g.add_edge(d, b, -6);

        assert_eq!(bellman_ford(&g, a), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let mut g: Graph<(), i32> = Graph::new();
        let s = g.add_vertex(());
        let t = g.add_vertex(());
        let x = g.add_vertex(());
        let y = g.add_vertex(());
        g.add_edge(s, t, 2);
        g.add_edge(x, y, -5);
        g.add_edge(y, x, 1);

        let paths = bellman_ford(&g, s).unwrap();
        assert_eq!(paths.distance(t), Some(2));
        assert_eq!(paths.distance(x), None);
        assert_eq!(paths.distance(y), None);
    }

    #[test]
    fn test_infinity_never_relaxes() {
        // Without the finite-distance guard, `u -> v` with a huge negative
        // weight could "improve" v from an infinite u.
        let mut g: Graph<(), i64> = Graph::new();
        let s = g.add_vertex(());
        let u = g.add_vertex(());
        let v = g.add_vertex(());
        g.add_edge(u, v, i64::MIN);
        g.add_edge(s, v, 3);

        let paths = bellman_ford(&g, s).unwrap();
        assert_eq!(paths.distance(u), None);
        assert_eq!(paths.distance(v), Some(3));
    }

    #[test]
    fn test_undirected_negative_edge_is_a_cycle() {
        let mut g: Graph<(), i32, crate::graph::Undirected> = Graph::new_undirected();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, -1);
        assert_eq!(bellman_ford(&g, a), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn test_single_vertex_and_empty_graph() {
        let mut g: Graph<(), i32> = Graph::new();
        assert!(bellman_ford(&g, Vertex::new(0)).unwrap().distances.is_empty());
        let a = g.add_vertex(());
        assert_eq!(bellman_ford(&g, a).unwrap().distance(a), Some(0));
    }
}
