//! Proportional-bar histogram.
//!
//! Each line is `<key> [<percent>%] <bar> \n`. Bars are scaled against the
//! largest value so that entry always gets the full `max_bar_length`.

use std::fmt::{self, Write};

use indexmap::IndexMap;

use crate::{
    core::{config::Config, error::StatsError},
    render::number::{Measure, Rounded, ensure_finite},
};

/// Borrowed view of a frequency map that prints as a histogram.
pub struct Histogram<'a, K, V> {
    map: &'a IndexMap<K, V>,
    max_value: f64,
    cfg: &'a Config,
}

impl<'a, K, V> Histogram<'a, K, V>
where
    V: Measure,
{
    /// Fails with [`StatsError::InvalidMap`] when a value is not finite.
    pub fn new(map: &'a IndexMap<K, V>, cfg: &'a Config) -> Result<Self, StatsError> {
        ensure_finite(map, "must be a valid map")?;
        let max_value = map
            .values()
            .map(|v| v.measure())
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            map,
            max_value,
            cfg,
        })
    }

    /// Bar length for `value`: `floor(value / max * max_bar_length)`.
    ///
    /// * Non-positive values (or a non-positive maximum) get no bar.
    /// * Never longer than `max_bar_length`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn bar_len(&self, value: f64) -> usize {
        if self.max_value <= 0.0 || value <= 0.0 {
            return 0;
        }
        let max_len = self.cfg.max_bar_length;
        let len = ((value / self.max_value) * max_len as f64).floor() as usize;
        len.min(max_len)
    }
}

impl<K, V> fmt::Display for Histogram<'_, K, V>
where
    K: fmt::Display,
    V: Measure,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.map {
            let value = value.measure();
            let percentage = Rounded::new(value * 100.0, self.cfg.precision);
            write!(f, "{key} [{percentage}%] ")?;
            for _ in 0..self.bar_len(value) {
                f.write_char(self.cfg.bar_glyph)?;
            }
            f.write_str(" \n")?;
        }
        Ok(())
    }
}

/// Render `map` as a histogram. The empty map renders as `""`.
pub fn get_histogram_print_statistics<K, V>(
    map: &IndexMap<K, V>,
    cfg: &Config,
) -> Result<String, StatsError>
where
    K: fmt::Display,
    V: Measure,
{
    if map.is_empty() {
        return Ok(String::new());
    }
    Ok(Histogram::new(map, cfg)?.to_string())
}
