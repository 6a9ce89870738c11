//! Report rendering: tabular listing and histogram.

pub mod histogram;
pub mod number;
pub mod table;

use std::fmt;

use indexmap::IndexMap;

use crate::core::{config::Config, error::StatsError};

pub use histogram::{Histogram, get_histogram_print_statistics};
pub use number::{Measure, Rounded};
pub use table::{Table, get_print_statistics};

/// Layout of a report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Style {
    #[default]
    Histogram,
    Table,
}

/// Which map gets rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Values {
    #[default]
    Frequencies,
    Counts,
}

/// What to produce for one text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Analysis {
    pub style: Style,
    pub values: Values,
    /// Skip the sanitizer and count case-sensitively.
    pub keep_case: bool,
}

/// Dispatch to the renderer selected by `style`.
pub fn render<K, V>(map: &IndexMap<K, V>, style: Style, cfg: &Config) -> Result<String, StatsError>
where
    K: fmt::Display,
    V: Measure,
{
    match style {
        Style::Histogram => get_histogram_print_statistics(map, cfg),
        Style::Table => get_print_statistics(map, cfg),
    }
}
