use thiserror::Error;

use crate::shape::Dims;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("matmul: {operand}.len()={len} but expected {expected}")]
    SliceLength {
        operand: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("matmul overflow: C[{row}][{col}] does not fit in i64")]
    Overflow { row: usize, col: usize },
    #[error("ragged rows: row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("empty value range [{low}, {high})")]
    EmptyRange { low: i64, high: i64 },
    #[error("cannot generate a matrix with a zero dimension: {0}")]
    ZeroDimension(Dims),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
