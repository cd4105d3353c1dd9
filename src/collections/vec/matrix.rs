//! A row-major 2D matrix over one contiguous `Vec`.
//!
//! Used for all-pairs distance tables and adjacency weight matrices, where
//! the inner loops walk rows and benefit from contiguous storage.

use core::fmt;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// A dense 2D matrix.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DenseMatrix<T> {
    /// Creates a `rows x cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a square `n x n` matrix filled with `value`.
    pub fn square(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::filled(n, n, value)
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterates over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `max(1)` keeps `chunks` valid for zero-column matrices.
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Returns the backing row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Builds a matrix from nested rows.
    ///
    /// Returns `Err((row, len))` for the first row whose length differs from
    /// the first row's.
    pub fn try_from_rows<R>(rows: &[R]) -> Result<Self, (usize, usize)>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err((i, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}
