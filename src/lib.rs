//! # `meridian` - Weighted Graph Algorithms
//!
//! A small toolkit of classic graph algorithms over an arena-indexed
//! adjacency list. Vertices are plain indices, edges carry an integer
//! weight, and every algorithm reads the graph without mutating it.
//!
//! ## Algorithms
//!
//! | Family        | Functions                                              |
//! |---------------|--------------------------------------------------------|
//! | Traversal     | [`Bfs`], [`Dfs`], [`bfs_hops`], [`connected_components`] |
//! | Shortest path | [`dijkstra`], [`bellman_ford`], [`floyd_warshall`], [`astar`] |
//! | Spanning tree | [`kruskal`], [`prim`]                                  |
//!
//! ## Infinity
//!
//! Unreached distances are `None`, never a sentinel value. All weight
//! additions are checked: a sum that would overflow is treated as no
//! improvement rather than wrapping.
//!
//! ## Preconditions
//!
//! Dijkstra and A* require non-negative weights, and A* only returns an
//! optimal path for an admissible heuristic. Neither condition is checked.
//! Bellman-Ford and Floyd-Warshall report negative cycles as
//! [`GraphError::NegativeCycle`].
//!
//! ## Example
//!
//! ```
//! use meridian::{dijkstra, Graph};
//!
//! let mut g: Graph<&str, u32> = Graph::new();
//! let a = g.add_vertex("A");
//! let b = g.add_vertex("B");
//! let c = g.add_vertex("C");
//! g.add_edge(a, b, 1);
//! g.add_edge(b, c, 2);
//! g.add_edge(a, c, 4);
//!
//! let paths = dijkstra(&g, a);
//! assert_eq!(paths.distance(c), Some(3));
//! assert_eq!(paths.path_to(c).unwrap().vertices, vec![a, b, c]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`trace`/`warn` events from the algorithms.
//! - `cli`: build the `meridian` binary (implies `tracing`).

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod error;
pub mod graph;
pub mod weight;

pub use collections::{DenseMatrix, DisjointSet, MinQueue};
pub use error::{GraphError, GraphResult};
pub use graph::{
    astar, astar_path, bellman_ford, bfs_hops, bfs_order, component_count, connected_components,
    dfs_order, dijkstra, dijkstra_path, floyd_warshall, kruskal, kruskal_graph, prim, prim_graph,
    prim_rows, AnyGraph, Bfs, Dfs, DiGraph, Directed, DistanceMap, DistanceMatrix, EdgeType,
    Graph, GraphDescription, MstEdge, Path, PrimTree, ShortestPaths, SpanningForest, UnGraph,
    Undirected, Vertex, WeightedEdge,
};
pub use weight::Weight;

// Compile-time layout checks
const _: () = {
    use core::mem;

    // `Vertex` is a bare index.
    assert!(mem::size_of::<Vertex>() == mem::size_of::<usize>());
    // `None` distances cost no more than a tagged weight.
    assert!(mem::size_of::<Option<Vertex>>() <= 2 * mem::size_of::<usize>());
};
