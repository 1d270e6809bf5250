//! This module defines the [`RunOpts`] configuration which describes how many bootstrap rounds to
//! run and how each round is computed.

use crate::constants::NR_RESAMPLED_COLUMNS;
use crate::distance::Metric;

/// Bootstrap run options.
#[derive(Debug, typed_builder::TypedBuilder)]
pub struct RunOpts<M: Metric> {
    /// Number of bootstrap rounds.
    pub nr_samples: usize,
    /// Distance metric.
    pub metric: M,
    /// Number of columns overwritten per round.
    #[builder(default = NR_RESAMPLED_COLUMNS)]
    pub nr_resampled: usize,
    /// Whether to draw a progress bar on stderr.
    #[builder(default = false)]
    pub show_progress: bool,
}
