//! Traversal iterators and unweighted algorithms for `Graph`.
//!
//! `Bfs` and `Dfs` are lazy iterators yielding [`Vertex`] handles. Both
//! borrow the graph immutably and keep their own scratch state, so any
//! number of traversals may run over the same graph.

use crate::collections::DisjointSet;
use crate::graph::access::VisitedSet;
use crate::graph::basic::adj_list::{EdgeType, Graph, Vertex};
use std::collections::VecDeque;

/// An iterator for Breadth-First Search (BFS).
///
/// A vertex is marked visited when it is enqueued, so it is enqueued at most
/// once and is reached along a path with the fewest edges.
///
/// A start vertex that is not in the graph is yielded once and not expanded.
pub struct Bfs<'g, L, W, Ty> {
    graph: &'g Graph<L, W, Ty>,
    visited: VisitedSet,
    queue: VecDeque<Vertex>,
}

impl<'g, L, W, Ty: EdgeType> Bfs<'g, L, W, Ty> {
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'g Graph<L, W, Ty>, start: Vertex) -> Self {
        let mut visited = VisitedSet::new(graph.vertex_count());
        let mut queue = VecDeque::new();

        visited.try_visit(start.index());
        queue.push_back(start);

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<L, W, Ty: EdgeType> Iterator for Bfs<'_, L, W, Ty> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for edge in self.graph.neighbors(u) {
            if self.visited.try_visit(edge.destination.index()) {
                self.queue.push_back(edge.destination);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS) in pre-order.
///
/// Emulates the recursive walk with an explicit stack of
/// `(vertex, next neighbor position)` frames: neighbors are explored in
/// adjacency order and the stack never exceeds the depth of the walk, so
/// long chains cannot overflow the call stack.
pub struct Dfs<'g, L, W, Ty> {
    graph: &'g Graph<L, W, Ty>,
    visited: VisitedSet,
    stack: Vec<(Vertex, usize)>,
    start: Option<Vertex>,
}

impl<'g, L, W, Ty: EdgeType> Dfs<'g, L, W, Ty> {
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'g Graph<L, W, Ty>, start: Vertex) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack: Vec::new(),
            start: Some(start),
        }
    }
}

impl<L, W, Ty: EdgeType> Iterator for Dfs<'_, L, W, Ty> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.visited.try_visit(start.index());
            self.stack.push((start, 0));
            return Some(start);
        }

        loop {
            let (u, cursor) = self.stack.last_mut()?;
            let edges = self.graph.neighbors(*u);
            if *cursor == edges.len() {
                self.stack.pop();
                continue;
            }

            let v = edges[*cursor].destination;
            *cursor += 1;
            if self.visited.try_visit(v.index()) {
                self.stack.push((v, 0));
                return Some(v);
            }
        }
    }
}

/// Returns the BFS visitation order from `start`.
pub fn bfs_order<L, W, Ty: EdgeType>(graph: &Graph<L, W, Ty>, start: Vertex) -> Vec<Vertex> {
    Bfs::new(graph, start).collect()
}

/// Returns the DFS pre-order from `start`.
pub fn dfs_order<L, W, Ty: EdgeType>(graph: &Graph<L, W, Ty>, start: Vertex) -> Vec<Vertex> {
    Dfs::new(graph, start).collect()
}

/// Computes the minimum number of edges from `start` to every vertex.
///
/// Index `i` holds the hop count of vertex `i`, or `None` if it is
/// unreachable. Edge weights are ignored.
pub fn bfs_hops<L, W, Ty: EdgeType>(graph: &Graph<L, W, Ty>, start: Vertex) -> Vec<Option<usize>> {
    let mut hops = vec![None; graph.vertex_count()];
    if !graph.contains_vertex(start) {
        return hops;
    }

    let mut queue = VecDeque::new();
    hops[start.index()] = Some(0);
    queue.push_back((start, 0usize));

    while let Some((u, depth)) = queue.pop_front() {
        for edge in graph.neighbors(u) {
            let slot = &mut hops[edge.destination.index()];
            if slot.is_none() {
                *slot = Some(depth + 1);
                queue.push_back((edge.destination, depth + 1));
            }
        }
    }

    hops
}

/// Computes the connected components of the graph.
///
/// Returns a vector where the index corresponds to the vertex index,
/// and the value is the component ID (representative vertex index).
/// Edge direction is ignored, so on a directed graph these are the weakly
/// connected components.
pub fn connected_components<L, W, Ty: EdgeType>(graph: &Graph<L, W, Ty>) -> Vec<usize> {
    let len = graph.vertex_count();
    let mut ds = DisjointSet::with_len(len);

    for edge in graph.all_edges() {
        ds.union(edge.source.index(), edge.destination.index());
    }

    (0..len).map(|u| ds.find(u)).collect()
}

/// Counts the connected components of the graph (edge direction ignored).
pub fn component_count<L, W, Ty: EdgeType>(graph: &Graph<L, W, Ty>) -> usize {
    connected_components(graph)
        .iter()
        .enumerate()
        .filter(|&(u, &root)| u == root)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1-2, 1-3, 2-4, 3-4, 4-5 (undirected, unit weights).
    fn diamond_with_tail() -> (Graph<u32, i32, crate::graph::Undirected>, Vec<Vertex>) {
        let mut g = Graph::new_undirected();
        let n: Vec<_> = (1..=5).map(|id| g.add_vertex(id)).collect();
        g.add_edge(n[0], n[1], 1);
        g.add_edge(n[0], n[2], 1);
        g.add_edge(n[1], n[3], 1);
        g.add_edge(n[2], n[3], 1);
        g.add_edge(n[3], n[4], 1);
        (g, n)
    }

    fn labels(g: &Graph<u32, i32, crate::graph::Undirected>, order: &[Vertex]) -> Vec<u32> {
        order.iter().map(|&v| *g.label(v).unwrap()).collect()
    }

    #[test]
    fn test_bfs_order() {
        let (g, n) = diamond_with_tail();
        assert_eq!(labels(&g, &bfs_order(&g, n[0])), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dfs_matches_recursive_preorder() {
        let (g, n) = diamond_with_tail();
        // Recursive walk: 1 -> 2 -> 4 -> 3 (via 4) -> 5 (via 4).
        assert_eq!(labels(&g, &dfs_order(&g, n[0])), vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_dfs_on_cycle_terminates() {
        let mut g: Graph<(), (), _> = Graph::new();
        let v: Vec<_> = (0..3).map(|_| g.add_vertex(())).collect();
        g.add_edge(v[0], v[1], ());
        g.add_edge(v[1], v[2], ());
        g.add_edge(v[2], v[0], ());
        assert_eq!(dfs_order(&g, v[1]), vec![v[1], v[2], v[0]]);
    }

    #[test]
    fn test_dfs_long_chain() {
        let mut g: Graph<(), u8> = Graph::with_capacity(100_000);
        let mut prev = g.add_vertex(());
        for _ in 1..100_000 {
            let next = g.add_vertex(());
            g.add_edge(prev, next, 0);
            prev = next;
        }
        assert_eq!(Dfs::new(&g, Vertex::new(0)).count(), 100_000);
    }

    #[test]
    fn test_start_not_in_graph() {
        let (g, _) = diamond_with_tail();
        let outside = Vertex::new(42);
        assert_eq!(bfs_order(&g, outside), vec![outside]);
        assert_eq!(dfs_order(&g, outside), vec![outside]);
        assert!(bfs_hops(&g, outside).iter().all(Option::is_none));
    }

    #[test]
    fn test_bfs_hops() {
        let (g, n) = diamond_with_tail();
        assert_eq!(
            bfs_hops(&g, n[0]),
            vec![Some(0), Some(1), Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_connected_components() {
        let mut g: Graph<(), i32> = Graph::new();
        let v: Vec<_> = (0..5).map(|_| g.add_vertex(())).collect();
        g.add_edge(v[0], v[1], 1);
        g.add_edge(v[3], v[2], 1);

        let comps = connected_components(&g);
        assert_eq!(comps[0], comps[1]);
        assert_eq!(comps[2], comps[3]);
        assert_ne!(comps[0], comps[2]);
        assert_ne!(comps[4], comps[0]);
        assert_eq!(component_count(&g), 3);
    }
}
