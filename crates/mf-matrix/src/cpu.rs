use std::fmt::Debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Seam for matrix-multiplication kernels.
///
/// Data is passed in as row-major slices and returned as an owned vector.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this multiplier (e.g., "cpu").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - Returns: row-major data of shape [m, n]
    fn matmul(&self, a: &[i64], b: &[i64], m: usize, k: usize, n: usize) -> Result<Vec<i64>>;
}

/// Textbook triple-loop multiplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuMultiplier;

impl CpuMultiplier {
    pub fn new() -> Self {
        CpuMultiplier
    }
}

impl Multiplier for CpuMultiplier {
    fn name(&self) -> &str {
        "cpu"
    }

    fn matmul(&self, a: &[i64], b: &[i64], m: usize, k: usize, n: usize) -> Result<Vec<i64>> {
        if a.len() != m * k {
            return Err(MatrixError::SliceLength {
                operand: "a",
                len: a.len(),
                expected: m * k,
            });
        }
        if b.len() != k * n {
            return Err(MatrixError::SliceLength {
                operand: "b",
                len: b.len(),
                expected: k * n,
            });
        }

        let mut c = vec![0i64; m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = 0i64;
                for p in 0..k {
                    sum = a[i * k + p]
                        .checked_mul(b[p * n + j])
                        .and_then(|prod| sum.checked_add(prod))
                        .ok_or(MatrixError::Overflow { row: i, col: j })?;
                }
                c[i * n + j] = sum;
            }
        }
        Ok(c)
    }
}

/// Multiply two matrices with the `CpuMultiplier`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let started = std::time::Instant::now();
    let c = a.matmul(b, &CpuMultiplier)?;
    log::debug!(
        "multiplied {} @ {} -> {} in {:?}",
        a.dims(),
        b.dims(),
        c.dims(),
        started.elapsed()
    );
    Ok(c)
}
