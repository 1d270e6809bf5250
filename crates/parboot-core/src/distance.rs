//! Distances between two languages' parameter sequences.

use crate::table::Param;

/// The trait that must be implemented by all distance metrics.
pub trait Metric {
    /// Computes the distance between two parameter sequences of equal length.
    fn distance(&self, a: &[Param], b: &[Param]) -> Result<f64, DistanceError>;
}

impl<M: Metric> Metric for &M {
    fn distance(&self, a: &[Param], b: &[Param]) -> Result<f64, DistanceError> {
        (*self).distance(a, b)
    }
}

/// Normalized Hamming distance. See [`hamming`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Hamming;

impl Metric for Hamming {
    fn distance(&self, a: &[Param], b: &[Param]) -> Result<f64, DistanceError> {
        hamming(a, b)
    }
}

/// Jaccard-style distance. See [`jaccard`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Jaccard;

impl Metric for Jaccard {
    fn distance(&self, a: &[Param], b: &[Param]) -> Result<f64, DistanceError> {
        jaccard(a, b)
    }
}

/// Computes the normalized Hamming distance between `a` and `b`.
///
/// Only positions where neither value is [`Param::Missing`] are compared. The result is the
/// number of mismatching positions divided by the number of compared positions.
pub fn hamming(a: &[Param], b: &[Param]) -> Result<f64, DistanceError> {
    check_lengths(a, b)?;
    let (mismatches, compared) = a
        .iter()
        .zip(b)
        .filter(|(x, y)| !x.is_missing() && !y.is_missing())
        .fold((0usize, 0usize), |(mismatches, compared), (x, y)| {
            (mismatches + usize::from(x != y), compared + 1)
        });
    ratio(mismatches, compared)
}

/// Computes a Jaccard-style distance between `a` and `b`.
///
/// Only `+`/`+` counts as an identity and only `+`/`-` or `-`/`+` counts as a difference; every
/// other pair is ignored. The result is `differences / (identities + differences)`.
pub fn jaccard(a: &[Param], b: &[Param]) -> Result<f64, DistanceError> {
    use Param::*;
    check_lengths(a, b)?;
    let (mut identities, mut differences) = (0, 0);
    for pair in a.iter().zip(b) {
        match pair {
            (Present, Present) => identities += 1,
            (Present, Absent) | (Absent, Present) => differences += 1,
            _ => {}
        }
    }
    ratio(differences, identities + differences)
}

fn check_lengths(a: &[Param], b: &[Param]) -> Result<(), DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

fn ratio(numerator: usize, denominator: usize) -> Result<f64, DistanceError> {
    if denominator == 0 {
        return Err(DistanceError::Undefined);
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Distance error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// The sequences have different lengths.
    #[error("cannot compare sequences of length {left} and {right}")]
    LengthMismatch {
        /// The length of the first sequence.
        left: usize,
        /// The length of the second sequence.
        right: usize,
    },

    /// No position is informative for both sequences.
    #[error("distance is undefined: no informative positions in common")]
    Undefined,
}
