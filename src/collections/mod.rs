//! Collections used as algorithm scratch state.
//!
//! Collections are organized by data structure type:
//! - `vec`: Vector-backed collections (dense matrices)
//! - `other`: Specialized collections (union-find, priority queue)

pub mod other;
pub mod vec;

pub use other::{DisjointSet, MinQueue};
pub use vec::DenseMatrix;
