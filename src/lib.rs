//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    constants::{DECIMAL_PRECISION, DEFAULT_MAX_BAR_LENGTH, TERMINAL_MARGIN},
    error::{ConfigError, StatsError, TextalyzeError},
    frequency::{CountMap, FrequencyMap, item_counts, item_frequencies},
    terminal::max_bar_length,
    text::{get_chars, sanitize},
};

pub use render::{
    Analysis, Measure, Style, Values, get_histogram_print_statistics, get_print_statistics,
};

/// Run the whole pipeline over one text: sanitize, split into characters,
/// count, optionally derive frequencies, render.
pub fn analyze_text(
    text: impl AsRef<[u8]>,
    analysis: &Analysis,
    cfg: &Config,
) -> Result<String, TextalyzeError> {
    let chars = if analysis.keep_case {
        get_chars(text)?
    } else {
        get_chars(sanitize(text)?)?
    };
    let counts = item_counts(chars);

    let report = match analysis.values {
        Values::Counts => render::render(&counts, analysis.style, cfg)?,
        Values::Frequencies => render::render(&item_frequencies(&counts), analysis.style, cfg)?,
    };
    Ok(report)
}
