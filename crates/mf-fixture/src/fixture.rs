use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mf_matrix::{multiply, Matrix, MatrixGenerator};

use crate::config::FixtureConfig;
use crate::error::Result;
use crate::serialize::write_fixture;

/// Operands A and B, their product C and the header flags.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
    pub slot_count: usize,
    pub is_cipher: bool,
    pub is_signed: bool,
}

impl Fixture {
    /// Package caller-supplied operands, computing `c = a @ b`.
    ///
    /// Fails with `DimensionMismatch` when `a.cols() != b.rows()`; the
    /// config's dimensions are not consulted.
    pub fn from_parts(config: &FixtureConfig, a: Matrix, b: Matrix) -> Result<Fixture> {
        let c = multiply(&a, &b)?;
        Ok(Fixture {
            a,
            b,
            c,
            slot_count: config.slot_count,
            is_cipher: config.is_cipher,
            is_signed: config.is_signed,
        })
    }

    /// Generate A, then B, from `rng` and multiply them.
    pub fn generate<R: Rng>(config: &FixtureConfig, rng: &mut R) -> Result<Fixture> {
        config.validate()?;
        let generator = MatrixGenerator::new(config.range);
        let a = generator.generate(config.dims_a(), rng)?;
        let b = generator.generate(config.dims_b(), rng)?;
        Self::from_parts(config, a, b)
    }

    /// Number of encrypted inputs: one per row of A plus one per column of B.
    pub fn nb_inputs(&self) -> usize {
        self.a.rows() + self.b.cols()
    }

    /// Number of outputs: one per row of C.
    pub fn nb_outputs(&self) -> usize {
        self.a.rows()
    }

    /// Write the fixture to `path`, creating or truncating the file.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_fixture(self, &mut writer)?;
        writer.flush()?;
        log::info!(
            "wrote {} fixture ({} inputs, {} outputs) to {}",
            self.c.dims(),
            self.nb_inputs(),
            self.nb_outputs(),
            path.display()
        );
        Ok(())
    }
}

/// Build a fixture with a `StdRng` seeded from `config.seed`, or from OS
/// entropy when no seed is set.
pub fn build_fixture(config: &FixtureConfig) -> Result<Fixture> {
    let mut rng = match config.seed {
        Some(seed) => {
            log::debug!("seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Fixture::generate(config, &mut rng)
}
