use crate::cpu::Multiplier;
use crate::error::{MatrixError, Result};
use crate::shape::Dims;

/// A dense integer matrix.
///
/// Holds contiguous, row-major `i64` data with its dimensions. Every matrix is
/// fully populated on construction and is not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    dims: Dims,
}

impl Matrix {
    /// Create a new matrix from row-major data and dimensions.
    ///
    /// # Panics
    /// Panics if `data.len() != dims.numel()`.
    pub fn new(data: Vec<i64>, dims: Dims) -> Self {
        assert_eq!(
            data.len(),
            dims.numel(),
            "data length {} does not match dims {} (numel={})",
            data.len(),
            dims,
            dims.numel()
        );
        Matrix { data, dims }
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Matrix> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix {
            data,
            dims: Dims::new(rows.len(), cols),
        })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell, row by row.
    pub fn from_fn(dims: Dims, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let mut data = Vec::with_capacity(dims.numel());
        for r in 0..dims.rows {
            for c in 0..dims.cols {
                data.push(f(r, c));
            }
        }
        Matrix { data, dims }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(dims: Dims) -> Self {
        Matrix {
            data: vec![0; dims.numel()],
            dims,
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(Dims::square(n), |r, c| i64::from(r == c))
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "index ({}, {}) out of bounds for {} matrix",
            row,
            col,
            self.dims
        );
        self.data[self.dims.offset(row, col)]
    }

    /// Returns row `r` as a slice.
    pub fn row(&self, r: usize) -> &[i64] {
        let start = r * self.dims.cols;
        &self.data[start..start + self.dims.cols]
    }

    /// Iterates over column `c` from top to bottom.
    pub fn col(&self, c: usize) -> impl Iterator<Item = i64> + '_ {
        assert!(c < self.dims.cols, "column {} out of bounds for {} matrix", c, self.dims);
        self.data.iter().skip(c).step_by(self.dims.cols).copied()
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.dims.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Matrix multiplication using the given multiplier.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    pub fn matmul(&self, other: &Matrix, multiplier: &dyn Multiplier) -> Result<Matrix> {
        let out = Dims::matmul_output(self.dims, other.dims)?;
        let data = multiplier.matmul(
            &self.data,
            &other.data,
            self.dims.rows,
            self.dims.cols,
            other.dims.cols,
        )?;
        Ok(Matrix::new(data, out))
    }
}
