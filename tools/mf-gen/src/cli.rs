use clap::{Args, Parser};
use mf_fixture::{FixtureConfig, DEFAULT_OUTPUT, DEFAULT_SLOT_COUNT};
use mf_matrix::ValueRange;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mf-gen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a matrix-multiplication benchmark fixture (A, B and C = A @ B)."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: GenArgs,

    // verbosity (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Slot count written to the header; default size of every dimension
    #[arg(short = 's', long, default_value_t = DEFAULT_SLOT_COUNT)]
    pub slot_count: usize,

    /// Rows of A and C [default: slot count]
    #[arg(long, value_name = "M")]
    pub rows: Option<usize>,

    /// Columns of A, rows of B [default: slot count]
    #[arg(long, value_name = "K")]
    pub inner: Option<usize>,

    /// Columns of B and C [default: slot count]
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Seed for reproducible output; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest generated value (inclusive)
    #[arg(long, default_value_t = -5, allow_negative_numbers = true)]
    pub low: i64,

    /// Upper bound of generated values (exclusive)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub high: i64,

    /// Write the cipher flag as 0
    #[arg(long)]
    pub plain: bool,

    /// Write the signed flag as 0
    #[arg(long)]
    pub unsigned: bool,

    /// Output file
    #[arg(short = 'o', long, value_name = "PATH", default_value = DEFAULT_OUTPUT, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

impl GenArgs {
    pub fn into_config(self) -> anyhow::Result<FixtureConfig> {
        let range = ValueRange::new(self.low, self.high)?;
        Ok(FixtureConfig {
            slot_count: self.slot_count,
            a_rows: self.rows.unwrap_or(self.slot_count),
            inner: self.inner.unwrap_or(self.slot_count),
            b_cols: self.cols.unwrap_or(self.slot_count),
            is_cipher: !self.plain,
            is_signed: !self.unsigned,
            range,
            seed: self.seed,
            output: self.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["mf-gen"]).args.into_config().unwrap();
        assert_eq!(config.slot_count, 128);
        assert_eq!((config.a_rows, config.inner, config.b_cols), (128, 128, 128));
        assert!(config.is_cipher && config.is_signed);
        assert_eq!(config.range, ValueRange::DEFAULT);
        assert_eq!(config.seed, None);
        assert_eq!(config.output, PathBuf::from("matrix_mul_io_example.txt"));
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "mf-gen", "-s", "16", "--rows", "4", "--seed", "9", "--low", "-2", "--high", "3",
            "--plain", "--unsigned", "-o", "out.txt", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let config = cli.args.into_config().unwrap();
        assert_eq!(config.slot_count, 16);
        assert_eq!((config.a_rows, config.inner, config.b_cols), (4, 16, 16));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.range, ValueRange::new(-2, 3).unwrap());
        assert!(!config.is_cipher);
        assert!(!config.is_signed);
        assert_eq!(config.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_empty_range_rejected() {
        let cli = parse(&["mf-gen", "--low", "5", "--high", "5"]);
        assert!(cli.args.into_config().is_err());
    }
}
