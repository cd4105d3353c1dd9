//! Weighted graphs and the algorithms that run over them.
//!
//! Graph code is organized into categories:
//! - `basic`: the adjacency list representation and traversals
//! - `shortest_path`: Dijkstra, Bellman-Ford, Floyd-Warshall and A*
//! - `spanning`: Kruskal and Prim minimum spanning trees

pub mod basic;
pub mod shortest_path;
pub mod spanning;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{
    bfs_hops, bfs_order, component_count, connected_components, dfs_order, AnyGraph, Bfs, Dfs,
    DiGraph, Directed, EdgeDescription, EdgeType, Graph, GraphDescription, UnGraph, Undirected,
    Vertex, WeightedEdge,
};
pub use shortest_path::{
    astar, astar_path, bellman_ford, dijkstra, dijkstra_path, floyd_warshall, DistanceMap,
    DistanceMatrix, Path, PredecessorMap, ShortestPaths,
};
pub use spanning::{kruskal, kruskal_graph, prim, prim_graph, prim_rows, MstEdge, PrimTree, SpanningForest};
