//! Numeric plumbing shared by the renderers.

use std::fmt;

use indexmap::IndexMap;

use crate::core::{constants::MAX_PRECISION, error::StatsError};

/// A numeric map value the renderers know how to print.
pub trait Measure: Copy {
    fn measure(self) -> f64;
}

impl Measure for f64 {
    #[inline]
    fn measure(self) -> f64 {
        self
    }
}

macro_rules! lossless_measure {
    ($($t:ty),*) => {$(
        impl Measure for $t {
            #[inline]
            fn measure(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

macro_rules! lossy_measure {
    ($($t:ty),*) => {$(
        impl Measure for $t {
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn measure(self) -> f64 {
                self as f64
            }
        }
    )*};
}

lossless_measure!(f32, u32, i32);
lossy_measure!(usize, u64, i64);

/// Prints `value` rounded to `precision` decimals, half away from zero,
/// without trailing zeros (`1966`, `2.25`, `0.1`).
#[derive(Clone, Copy, Debug)]
pub struct Rounded {
    pub value: f64,
    pub precision: usize,
}

impl Rounded {
    #[inline]
    #[must_use]
    pub fn new(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn get(self) -> f64 {
        let factor = 10_f64.powi(self.precision.min(MAX_PRECISION) as i32);
        // `+ 0.0` turns -0.0 into 0.0
        (self.value * factor).round() / factor + 0.0
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Reject maps holding NaN or infinities.
pub(crate) fn ensure_finite<K, V: Measure>(
    map: &IndexMap<K, V>,
    message: &'static str,
) -> Result<(), StatsError> {
    if map.values().all(|v| v.measure().is_finite()) {
        Ok(())
    } else {
        Err(StatsError::InvalidMap(message))
    }
}
