use std::io::Write;

use indicatif::ProgressBar;
use log::info;
use rand::Rng;

use crate::bootstrap::{self, BootstrapError};
use crate::distance::Metric;
use crate::matrix::{self, DistanceMatrix, MatrixError};
use crate::opts::RunOpts;
use crate::table::Table;

/// The core `parboot` routine. This runs `opts.nr_samples` bootstrap rounds over `table` and
/// appends one rendered distance matrix per round to `out`, in round order.
///
/// `rng` is shared by all rounds and never reseeded, so a run is reproducible from the seed of
/// `rng` alone. This function returns on the first error; blocks written before it stay written.
pub fn run<M, R, W>(table: &Table, opts: &RunOpts<M>, rng: &mut R, mut out: W) -> Result<(), Error>
where
    M: Metric,
    R: Rng + ?Sized,
    W: Write,
{
    if opts.nr_samples == 0 {
        return Err(Error::NoSamples);
    }
    info!(
        "Running {} bootstrap rounds over {} languages and {} parameters",
        opts.nr_samples,
        table.nr_languages(),
        table.nr_columns()
    );
    let bar = if opts.show_progress {
        ProgressBar::new(opts.nr_samples as u64)
    } else {
        ProgressBar::hidden()
    };
    for _ in 0..opts.nr_samples {
        let resampled = bootstrap::resample(table, opts.nr_resampled, rng)?;
        let matrix = DistanceMatrix::compute(&resampled, &opts.metric)?;
        matrix::write_matrix(&mut out, table.names(), &matrix)?;
        bar.inc(1);
    }
    out.flush()?;
    bar.finish_and_clear();
    info!("Wrote {} distance matrices", opts.nr_samples);
    Ok(())
}

/// Bootstrap run error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No rounds were requested.
    #[error("the number of bootstrap rounds must be positive")]
    NoSamples,

    /// A round could not resample the table.
    #[error("failed to resample table")]
    Bootstrap(#[from] BootstrapError),

    /// A round produced an undefined distance.
    #[error("failed to compute distance matrix")]
    Matrix(#[from] MatrixError),

    /// I/O error.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
