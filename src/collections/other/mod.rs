//! Scratch collections used by the graph algorithms.

pub mod disjoint_set;
pub mod min_queue;

pub use disjoint_set::DisjointSet;
pub use min_queue::MinQueue;
