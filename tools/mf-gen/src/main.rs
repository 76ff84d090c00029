mod cli;

use crate::cli::{Cli, GenArgs};
use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use mf_fixture::build_fixture;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, overrides the -v flag.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_gen_cmd(args: GenArgs) -> anyhow::Result<()> {
    let config = args.into_config()?;
    debug!("mf-gen config: {:#?}", &config);

    let fixture = build_fixture(&config).context("failed to build fixture")?;
    info!(
        "A {} @ B {} -> C {}",
        fixture.a.dims(),
        fixture.b.dims(),
        fixture.c.dims()
    );

    fixture
        .write_to_path(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    run_gen_cmd(cli.args)
}
