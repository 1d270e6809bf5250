//! Pairwise distance matrices and their textual rendering.

use std::io::{self, Write};

use crate::constants::{FIELD_PRECISION, FIELD_WIDTH, NAME_SEPARATOR};
use crate::distance::{DistanceError, Metric};
use crate::table::Table;

/// A square, symmetric matrix of distances between the languages of a table. The diagonal is
/// always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes the distance between every pair of languages in `table`. Only the upper triangle
    /// is computed; self-distances are never computed.
    pub fn compute<M: Metric>(table: &Table, metric: &M) -> Result<Self, MatrixError> {
        let languages = table.languages().collect::<Vec<_>>();
        let dim = languages.len();
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            for j in (i + 1)..dim {
                let (a, b) = (languages[i], languages[j]);
                let d = metric
                    .distance(&a.params, &b.params)
                    .map_err(|source| MatrixError {
                        a: a.name.clone(),
                        b: b.name.clone(),
                        source,
                    })?;
                data[i * dim + j] = d;
                data[j * dim + i] = d;
            }
        }
        Ok(Self { dim, data })
    }

    /// Returns the number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the distance between languages `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.dim && j < self.dim).then(|| self.data[i * self.dim + j])
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // `max(1)` keeps `chunks` happy for an empty matrix.
        self.data.chunks(self.dim.max(1))
    }
}

/// Writes `matrix` as a text block: the number of languages, then one line per language with its
/// name and its row of distances, then two empty lines.
///
/// The block is appended to `w` as is, so calling this once per round yields a file of
/// consecutive matrices.
pub fn write_matrix<'a, W, I>(w: &mut W, names: I, matrix: &DistanceMatrix) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    writeln!(w, "{}", matrix.dim())?;
    for (name, row) in names.into_iter().zip(matrix.rows()) {
        write!(w, "{}{}", name, NAME_SEPARATOR)?;
        for d in row {
            write!(w, "{:>width$.prec$}", d, width = FIELD_WIDTH, prec = FIELD_PRECISION)?;
        }
        writeln!(w)?;
    }
    write!(w, "\n\n")
}

/// A distance could not be computed for a pair of languages.
#[derive(Debug, thiserror::Error)]
#[error("failed to compute the distance between `{a}` and `{b}`")]
pub struct MatrixError {
    /// The first language.
    pub a: String,
    /// The second language.
    pub b: String,
    /// The underlying distance error.
    #[source]
    pub source: DistanceError,
}

#[cfg(test)]
mod tests {
    use crate::distance::{Hamming, Jaccard};
    use crate::testing;

    use super::*;

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let table = testing::three_language_table();
        let matrix = DistanceMatrix::compute(&table, &Hamming).unwrap();
        assert_eq!(matrix.dim(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), Some(0.0));
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), Some(2.0 / 8.0));
        assert_eq!(matrix.get(0, 2), Some(2.0 / 6.0));
        assert_eq!(matrix.get(1, 2), Some(4.0 / 6.0));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn undefined_pair_names_languages() {
        let table = testing::table(&[("x", "+0+"), ("y", "0+0"), ("z", "+++")]);
        let err = DistanceMatrix::compute(&table, &Hamming).unwrap_err();
        assert_eq!((err.a.as_str(), err.b.as_str()), ("x", "y"));
        assert_eq!(err.source, DistanceError::Undefined);
    }

    #[test]
    fn jaccard_matrix_computes() {
        let table = testing::table(&[("x", "++-"), ("y", "+--")]);
        let matrix = DistanceMatrix::compute(&table, &Jaccard).unwrap();
        assert_eq!(matrix.get(0, 1), Some(0.5));
    }

    #[test]
    fn render_format_is_exact() {
        let table = testing::table(&[("a", "+-"), ("bb", "++")]);
        let matrix = DistanceMatrix::compute(&table, &Hamming).unwrap();
        let mut buf = Vec::new();
        write_matrix(&mut buf, table.names(), &matrix).unwrap();
        let expected = "2\n\
                        a            0.000     0.500\n\
                        bb            0.500     0.000\n\
                        \n\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn render_empty_matrix() {
        let table = testing::table(&[]);
        let matrix = DistanceMatrix::compute(&table, &Hamming).unwrap();
        let mut buf = Vec::new();
        write_matrix(&mut buf, table.names(), &matrix).unwrap();
        assert_eq!(buf, b"0\n\n\n");
    }

    #[test]
    fn renders_three_language_block() {
        let table = testing::three_language_table();
        let matrix = DistanceMatrix::compute(&table, &Hamming).unwrap();
        let mut buf = Vec::new();
        write_matrix(&mut buf, table.names(), &matrix).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        insta::assert_snapshot!(rendered);
    }
}
