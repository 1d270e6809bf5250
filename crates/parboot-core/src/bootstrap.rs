//! Quasi-bootstrap resampling of parameter tables.
//!
//! Each round overwrites a fixed number of randomly chosen columns with the values of another,
//! independently chosen set of columns. All other columns are left untouched.

use rand::Rng;

use crate::table::{Language, Table};

/// The columns involved in one resampling round. The `i`-th target column receives the values of
/// the `i`-th source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resampling {
    targets: Vec<usize>,
    sources: Vec<usize>,
}

impl Resampling {
    /// Draws `amount` distinct target columns and, independently, `amount` distinct source
    /// columns from `0..nr_columns`. The two samples may overlap.
    pub fn draw<R>(nr_columns: usize, amount: usize, rng: &mut R) -> Result<Self, BootstrapError>
    where
        R: Rng + ?Sized,
    {
        if nr_columns < amount {
            return Err(BootstrapError::InsufficientColumns {
                found: nr_columns,
                needed: amount,
            });
        }
        let targets = rand::seq::index::sample(rng, nr_columns, amount).into_vec();
        let sources = rand::seq::index::sample(rng, nr_columns, amount).into_vec();
        Ok(Self { targets, sources })
    }

    /// Creates a resampling from explicit target and source columns.
    pub fn from_columns(targets: Vec<usize>, sources: Vec<usize>) -> Result<Self, BootstrapError> {
        if targets.len() != sources.len() {
            return Err(BootstrapError::SampleSizeMismatch {
                targets: targets.len(),
                sources: sources.len(),
            });
        }
        Ok(Self { targets, sources })
    }

    /// Returns the columns that get overwritten.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Returns the columns whose values are copied.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Applies the resampling to `table`, returning a new table of the same shape. Values are
    /// always read from `table`, so the substitutions do not observe each other.
    pub fn apply(&self, table: &Table) -> Result<Table, BootstrapError> {
        let nr_columns = table.nr_columns();
        if let Some(&column) = self
            .targets
            .iter()
            .chain(&self.sources)
            .find(|&&c| c >= nr_columns)
        {
            return Err(BootstrapError::ColumnOutOfRange { column, nr_columns });
        }
        let languages = table
            .languages()
            .map(|lang| {
                let mut params = lang.params.clone();
                for (&t, &s) in self.targets.iter().zip(&self.sources) {
                    params[t] = lang.params[s];
                }
                Language::new(lang.name.clone(), params)
            })
            .collect();
        Ok(Table::new_unchecked(languages))
    }
}

/// Produces a bootstrap version of `table` by overwriting `amount` random columns with the values
/// of `amount` other random columns. `table` itself is left unchanged.
pub fn resample<R>(table: &Table, amount: usize, rng: &mut R) -> Result<Table, BootstrapError>
where
    R: Rng + ?Sized,
{
    let resampling = Resampling::draw(table.nr_columns(), amount, rng)?;
    log::debug!(
        "Resampling columns {:?} from {:?}",
        resampling.targets(),
        resampling.sources()
    );
    resampling.apply(table)
}

/// Bootstrap error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// The table has too few columns to draw a sample from.
    #[error("cannot resample {needed} columns from a table with {found} columns")]
    InsufficientColumns {
        /// The number of columns in the table.
        found: usize,
        /// The number of columns to resample.
        needed: usize,
    },

    /// A column index is out of range.
    #[error("column {column} is out of range for a table with {nr_columns} columns")]
    ColumnOutOfRange {
        /// The offending column.
        column: usize,
        /// The number of columns in the table.
        nr_columns: usize,
    },

    /// The target and source samples have different sizes.
    #[error("{targets} target columns but {sources} source columns")]
    SampleSizeMismatch {
        /// The number of target columns.
        targets: usize,
        /// The number of source columns.
        sources: usize,
    },
}
