//! The adjacency list graph and its unweighted traversals.
//!
//! - `adj_list`: the [`Graph`] arena, [`Vertex`] handles and direction markers
//! - `algorithms`: BFS/DFS iterators, hop counts and connected components
//! - `description`: label-based serde format for loading graphs

pub mod adj_list;
pub mod algorithms;
pub mod description;

pub use adj_list::{DiGraph, Directed, EdgeType, Graph, UnGraph, Undirected, Vertex, WeightedEdge};
pub use algorithms::{
    bfs_hops, bfs_order, component_count, connected_components, dfs_order, Bfs, Dfs,
};
pub use description::{AnyGraph, EdgeDescription, GraphDescription};
