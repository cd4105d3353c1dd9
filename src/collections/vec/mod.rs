//! Vector-backed collections.

pub mod matrix;

pub use matrix::DenseMatrix;
