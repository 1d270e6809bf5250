#![warn(unreachable_pub, missing_debug_implementations)]

//! The core `parboot` library. This crate defines [the routine](run::run) that turns a table of
//! linguistic parameters into a sequence of quasi-bootstrapped
//! [distance matrices](matrix::DistanceMatrix), one per resampling round.

pub mod bootstrap;
pub mod constants;
pub mod distance;
pub mod matrix;
pub mod opts;
pub mod run;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{resample, BootstrapError, Resampling};
pub use distance::{hamming, jaccard, DistanceError, Hamming, Jaccard, Metric};
pub use matrix::{write_matrix, DistanceMatrix, MatrixError};
pub use opts::RunOpts;
pub use run::{run, Error};
pub use table::{read_table, Language, Param, Table, TableError};
