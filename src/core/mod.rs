//! Aggregates the statistics pipeline.

pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod terminal;
pub mod text;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::{DECIMAL_PRECISION, DEFAULT_MAX_BAR_LENGTH, TERMINAL_MARGIN};
pub use error::{ConfigError, StatsError, TextalyzeError};
pub use frequency::{CountMap, FrequencyMap, item_counts, item_frequencies};
pub use text::{get_chars, sanitize};
