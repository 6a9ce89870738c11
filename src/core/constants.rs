//! A collection of constants.

/// Columns kept free next to the histogram bars for the key and percentage.
pub const TERMINAL_MARGIN: usize = 20;

/// Bar budget used when no terminal is attached (pipes, CI, tests).
pub const DEFAULT_MAX_BAR_LENGTH: usize = 50;

/// Numbers are rounded to the second decimal place.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;

/// Upper bound for a configured precision; beyond this `f64` has no digits left to show.
pub const MAX_PRECISION: usize = 10;

/// Character the histogram bars are drawn with.
pub const BAR_GLYPH: char = '=';
