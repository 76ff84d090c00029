use crate::error::{MatrixError, Result};
use std::fmt;

/// Dimensions of a 2-D matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    pub fn new(rows: usize, cols: usize) -> Self {
        Dims { rows, cols }
    }

    /// Square dimensions `n x n`.
    pub fn square(n: usize) -> Self {
        Dims { rows: n, cols: n }
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn transposed(&self) -> Dims {
        Dims {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Row-major offset of `(row, col)`.
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Output dimensions of `a @ b`.
    ///
    /// `a` is [m, k], `b` is [k2, n]; the result is [m, n] when `k == k2`.
    pub fn matmul_output(a: Dims, b: Dims) -> Result<Dims> {
        if a.cols != b.rows {
            return Err(MatrixError::DimensionMismatch {
                m: a.rows,
                k: a.cols,
                k2: b.rows,
                n: b.cols,
            });
        }
        Ok(Dims::new(a.rows, b.cols))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_dims() {
        let d = Dims::new(2, 3);
        assert_eq!(d.numel(), 6);
        assert_eq!(d.transposed(), Dims::new(3, 2));
        assert_eq!(d.offset(1, 2), 5);
        assert!(!d.is_empty());
        assert!(Dims::new(0, 4).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dims::new(128, 64).to_string(), "128x64");
    }

    #[test]
    fn test_matmul_output() {
        let c = Dims::matmul_output(Dims::new(2, 3), Dims::new(3, 5)).unwrap();
        assert_eq!(c, Dims::new(2, 5));
    }

    #[test]
    fn test_matmul_output_mismatch() {
        let err = Dims::matmul_output(Dims::new(2, 3), Dims::new(4, 2)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                m: 2,
                k: 3,
                k2: 4,
                n: 2
            }
        );
        assert_eq!(err.to_string(), "matmul dimension mismatch: [2x3] @ [4x2]");
    }
}
