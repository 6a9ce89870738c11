//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{BAR_GLYPH, DECIMAL_PRECISION, DEFAULT_MAX_BAR_LENGTH, MAX_PRECISION},
    error::ConfigError,
};

/// Immutable parameters handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of the bar drawn for the largest value in a histogram.
    pub max_bar_length: usize,
    /// Decimals kept when printing values and percentages.
    pub precision: usize,
    pub bar_glyph: char,
}

impl Config {
    #[inline]
    pub fn builder(max_bar_length: usize) -> ConfigBuilder {
        ConfigBuilder::new(max_bar_length)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bar_length: DEFAULT_MAX_BAR_LENGTH,
            precision: DECIMAL_PRECISION,
            bar_glyph: BAR_GLYPH,
        }
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    max_bar_length: usize,
    precision: Option<usize>,
    bar_glyph: Option<char>,
}

impl ConfigBuilder {
    pub(crate) fn new(max_bar_length: usize) -> Self {
        Self {
            max_bar_length,
            precision: None,
            bar_glyph: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn precision(mut self, decimals: usize) -> Self {
        self.precision = Some(decimals);
        self
    }
    #[inline]
    #[must_use]
    pub fn precision_opt(mut self, decimals: Option<usize>) -> Self {
        if let Some(d) = decimals {
            self.precision = Some(d);
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn bar_glyph(mut self, glyph: char) -> Self {
        self.bar_glyph = Some(glyph);
        self
    }
    #[inline]
    #[must_use]
    pub fn bar_glyph_opt(mut self, glyph: Option<char>) -> Self {
        if let Some(g) = glyph {
            self.bar_glyph = Some(g);
        }
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let precision = self.precision.unwrap_or(DECIMAL_PRECISION);
        if precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange {
                got: precision,
                max: MAX_PRECISION,
            });
        }
        let bar_glyph = self.bar_glyph.unwrap_or(BAR_GLYPH);
        if bar_glyph.is_whitespace() || bar_glyph.is_control() {
            return Err(ConfigError::InvalidGlyph(bar_glyph));
        }
        Ok(Config {
            max_bar_length: self.max_bar_length,
            precision,
            bar_glyph,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
