use std::path::PathBuf;

use mf_matrix::{Dims, ValueRange};

use crate::error::{FixtureError, Result};

/// Slot count written to the header; also the default size of every dimension.
pub const DEFAULT_SLOT_COUNT: usize = 128;

/// File the fixture is written to when no path is given.
pub const DEFAULT_OUTPUT: &str = "matrix_mul_io_example.txt";

/// Parameters for one fixture.
///
/// A is `a_rows x inner`, B is `inner x b_cols`, C is `a_rows x b_cols`.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub slot_count: usize,
    pub a_rows: usize,
    pub inner: usize,
    pub b_cols: usize,
    /// Written as the cipher flag on every A, B and C line.
    pub is_cipher: bool,
    /// Written as the signed flag on A and B lines.
    pub is_signed: bool,
    pub range: ValueRange,
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl FixtureConfig {
    /// Square `slot_count x slot_count` operands with default flags and range.
    pub fn square(slot_count: usize) -> Self {
        Self {
            slot_count,
            a_rows: slot_count,
            inner: slot_count,
            b_cols: slot_count,
            ..Self::default()
        }
    }

    pub fn dims_a(&self) -> Dims {
        Dims::new(self.a_rows, self.inner)
    }

    pub fn dims_b(&self) -> Dims {
        Dims::new(self.inner, self.b_cols)
    }

    /// Reject configurations that cannot produce a fixture.
    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(FixtureError::InvalidConfig(
                "slot_count must be > 0".to_string(),
            ));
        }
        for (name, value) in [
            ("a_rows", self.a_rows),
            ("inner", self.inner),
            ("b_cols", self.b_cols),
        ] {
            if value == 0 {
                return Err(FixtureError::InvalidConfig(format!(
                    "{} must be > 0",
                    name
                )));
            }
        }
        // Every C cell is a sum of `inner` products of two drawn values.
        let bound = i64::try_from(self.range.max_abs())
            .ok()
            .and_then(|v| v.checked_mul(v))
            .and_then(|sq| sq.checked_mul(i64::try_from(self.inner).ok()?));
        if bound.is_none() {
            return Err(FixtureError::InvalidConfig(format!(
                "values in {} over an inner dimension of {} can overflow i64",
                self.range, self.inner
            )));
        }
        Ok(())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            a_rows: DEFAULT_SLOT_COUNT,
            inner: DEFAULT_SLOT_COUNT,
            b_cols: DEFAULT_SLOT_COUNT,
            is_cipher: true,
            is_signed: true,
            range: ValueRange::DEFAULT,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
