use std::fmt;

use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::shape::Dims;

/// Half-open integer range `[low, high)` that generated cells are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    low: i64,
    high: i64,
}

impl ValueRange {
    /// `[-5, 5)`, the range benchmark fixtures are drawn from.
    pub const DEFAULT: ValueRange = ValueRange { low: -5, high: 5 };

    /// Create a range, rejecting empty ones (`low >= high`).
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low >= high {
            return Err(MatrixError::EmptyRange { low, high });
        }
        Ok(ValueRange { low, high })
    }

    /// Largest absolute value a drawn cell can take.
    pub fn max_abs(&self) -> u64 {
        self.low.unsigned_abs().max((self.high - 1).unsigned_abs())
    }

    pub fn contains(&self, v: i64) -> bool {
        (self.low..self.high).contains(&v)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

/// Fills matrices with independent, uniformly drawn cells.
///
/// The random source is supplied per call, so a seeded `StdRng` gives
/// reproducible matrices and an entropy-seeded one gives fresh data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixGenerator {
    range: ValueRange,
}

impl MatrixGenerator {
    pub fn new(range: ValueRange) -> Self {
        Self { range }
    }

    /// Generate a `dims.rows x dims.cols` matrix, drawing cells row by row.
    pub fn generate<R: Rng>(&self, dims: Dims, rng: &mut R) -> Result<Matrix> {
        if dims.is_empty() {
            return Err(MatrixError::ZeroDimension(dims));
        }
        let range = self.range.low..self.range.high;
        let m = Matrix::from_fn(dims, |_, _| rng.gen_range(range.clone()));
        log::debug!("generated {} matrix with values in {}", dims, self.range);
        Ok(m)
    }
}
