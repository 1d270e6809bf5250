use std::fs::File;
use std::io::BufWriter;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use parboot_core::{Hamming, RunOpts};
use rand::prelude::*;

/// Computes quasi-bootstrapped Hamming distance matrices for a table of linguistic parameters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bootstrap rounds
    nr_samples: NonZeroUsize,

    /// Parameter table, one language per line
    input: PathBuf,

    /// File to write the distance matrices to (truncated first)
    output: PathBuf,

    /// Random seed. Drawn from the OS if not given
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = parboot_core::read_table(&args.input)
        .with_context(|| format!("failed to read table from {}", args.input.display()))?;
    info!(
        "Loaded {} languages with {} parameters from {}",
        table.nr_languages(),
        table.nr_columns(),
        args.input.display()
    );

    let seed = args.seed.unwrap_or_else(random);
    info!("Using random seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let out = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let opts = RunOpts::builder()
        .nr_samples(args.nr_samples.get())
        .metric(Hamming)
        .show_progress(true)
        .build();
    parboot_core::run(&table, &opts, &mut rng, BufWriter::new(out))
        .with_context(|| format!("failed to write matrices to {}", args.output.display()))?;
    Ok(())
}
