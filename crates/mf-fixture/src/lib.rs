//! `mf-fixture` - Matrix-multiplication benchmark fixtures.
//!
//! Generates A and B, computes C = A @ B and writes all three in the line
//! format consumed by the encrypted matmul benchmark.

pub mod config;
pub mod error;
pub mod fixture;
pub mod serialize;

pub use config::{FixtureConfig, DEFAULT_OUTPUT, DEFAULT_SLOT_COUNT};
pub use error::{FixtureError, Result};
pub use fixture::{build_fixture, Fixture};
pub use serialize::{render_fixture, write_fixture};
