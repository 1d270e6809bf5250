//! Resampling and output constants. These match the format expected by downstream
//! distance-matrix consumers.

/// The number of columns overwritten in each bootstrap round.
pub const NR_RESAMPLED_COLUMNS: usize = 6;

/// Separator between a language name and its first distance field.
pub const NAME_SEPARATOR: &str = "       ";

/// Width of a rendered distance field.
pub const FIELD_WIDTH: usize = 10;

/// Decimal places of a rendered distance field.
pub const FIELD_PRECISION: usize = 3;
