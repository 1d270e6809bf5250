//! This module defines parameter tables ([`Table`]), which consist of languages and their
//! parameter values. Tables are read once and never mutated; bootstrap rounds derive new tables
//! from them.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;

/// A single linguistic parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// The parameter is set (`+`).
    Present,
    /// The parameter is not set (`-`).
    Absent,
    /// The parameter is indeterminate or unknown (`0`).
    Missing,
}

impl Param {
    /// Returns the character used for this value in parameter tables.
    pub const fn symbol(self) -> char {
        match self {
            Param::Present => '+',
            Param::Absent => '-',
            Param::Missing => '0',
        }
    }

    /// Returns true if this value carries no information.
    pub const fn is_missing(self) -> bool {
        matches!(self, Param::Missing)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Param {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Param::Present),
            "-" => Ok(Param::Absent),
            "0" => Ok(Param::Missing),
            _ => Err(ParseParamError(s.to_owned())),
        }
    }
}

/// Error returned when a token is not one of `+`, `-` or `0`.
#[derive(Debug, thiserror::Error)]
#[error("`{0}` is not a parameter value (expected `+`, `-` or `0`)")]
pub struct ParseParamError(String);

/// A language and its parameter values.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Language {
    /// The language name. Names are unique within a table.
    pub name: String,
    /// Parameter values, one per column.
    pub params: Vec<Param>,
}

/// An ordered table of languages with equally long parameter sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    languages: Vec<Language>,
}

impl Table {
    /// Creates a table from a list of languages.
    ///
    /// Correctness properties:
    ///
    /// - Every language must have the same number of parameters.
    pub fn new(languages: Vec<Language>) -> Result<Self, TableError> {
        if let Some(first) = languages.first() {
            let expected = first.params.len();
            // CORRECTNESS: Every language must have the same number of parameters.
            if let Some(lang) = languages.iter().find(|l| l.params.len() != expected) {
                return Err(TableError::RaggedRow {
                    name: lang.name.clone(),
                    expected,
                    found: lang.params.len(),
                });
            }
        }
        Ok(Self { languages })
    }

    // PRECONDITION: every language has the same number of parameters
    pub(crate) fn new_unchecked(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Parses a table from whitespace-delimited text. Each non-blank line holds a language name
    /// followed by its parameter values.
    ///
    /// Languages keep the order in which their names first appear. If a name appears more than
    /// once, the last line wins: its values replace the earlier ones in place.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, TableError> {
        let mut languages: Vec<Language> = Vec::new();
        let mut name2idx: FxHashMap<String, usize> = FxHashMap::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let params = tokens
                .map(|token| {
                    token.parse::<Param>().map_err(|_| TableError::InvalidParam {
                        line: i + 1,
                        token: token.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            match name2idx.get(name) {
                Some(&idx) => languages[idx].params = params,
                None => {
                    name2idx.insert(name.to_owned(), languages.len());
                    languages.push(Language::new(name.to_owned(), params));
                }
            }
        }
        Self::new(languages)
    }

    /// Returns the number of parameter columns, or 0 for an empty table.
    pub fn nr_columns(&self) -> usize {
        self.languages.first().map_or(0, |l| l.params.len())
    }

    /// Returns an iterator over the language names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }

    delegate::delegate! {
        to self.languages {
            /// Returns the number of languages.
            #[call(len)]
            pub fn nr_languages(&self) -> usize;

            /// Returns true if the table has no languages.
            pub fn is_empty(&self) -> bool;

            /// Returns an iterator over the languages, in table order.
            #[call(iter)]
            pub fn languages(&self) -> impl Iterator<Item = &Language>;
        }
    }
}

/// Reads a [`Table`] from a file. See [`Table::from_reader`] for the format.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table, TableError> {
    let f = File::open(path)?;
    Table::from_reader(BufReader::new(f))
}

/// Error kinds for reading parameter tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// A token is not a parameter value.
    #[error("line {line}: `{token}` is not a parameter value (expected `+`, `-` or `0`)")]
    InvalidParam {
        /// The 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A language has a different number of parameters than the first one.
    #[error("language `{name}` has {found} parameters (expected {expected})")]
    RaggedRow {
        /// The language name.
        name: String,
        /// The number of parameters of the first language.
        expected: usize,
        /// The number of parameters of this language.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use crate::testing;

    use super::*;

    #[test]
    fn parse_keeps_file_order() {
        let table = Table::from_reader("b + -\na - 0\nc 0 +\n".as_bytes()).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(table.nr_languages(), 3);
        assert_eq!(table.nr_columns(), 2);
        assert_eq!(
            table.languages().nth(1).unwrap().params,
            testing::params("-0")
        );
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let input = "x + +\ny - -\nx 0 0\n";
        let table = Table::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(
            table.languages().next().unwrap().params,
            testing::params("00")
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\nx\t+ -\n   \ny - +\n\n";
        let table = Table::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.nr_languages(), 2);
    }

    #[test]
    fn invalid_param_fails() {
        let input = "x + -\ny - ?\n";
        assert!(matches!(
            Table::from_reader(input.as_bytes()),
            Err(TableError::InvalidParam { line: 2, ref token }) if token == "?"
        ));
    }

    #[test]
    fn ragged_row_fails() {
        let input = "x + - +\ny - +\n";
        assert!(matches!(
            Table::from_reader(input.as_bytes()),
            Err(TableError::RaggedRow {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn empty_table_has_no_columns() {
        let table = Table::from_reader("".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.nr_columns(), 0);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_table(dir.path().join("nope.txt")),
            Err(TableError::Io(_))
        ));
    }

    #[test]
    fn param_symbols_roundtrip() {
        for p in [Param::Present, Param::Absent, Param::Missing] {
            assert_eq!(p.to_string().parse::<Param>().unwrap(), p);
        }
        assert!("++".parse::<Param>().is_err());
    }
}
