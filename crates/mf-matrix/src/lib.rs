//! `mf-matrix` - Integer matrices for matmul-fixture.
//!
//! This crate provides:
//! - A `Matrix` type with contiguous row-major `i64` storage
//! - A `Multiplier` trait and the reference `CpuMultiplier`
//! - A `MatrixGenerator` drawing cells from a half-open `ValueRange`
//! - `Dims` for 2-D shape bookkeeping

pub mod cpu;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use cpu::{multiply, CpuMultiplier, Multiplier};
pub use error::{MatrixError, Result};
pub use generate::{MatrixGenerator, ValueRange};
pub use matrix::Matrix;
pub use shape::Dims;
