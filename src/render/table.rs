//! Plain `key \t value` listing.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    core::{config::Config, error::StatsError},
    render::number::{Measure, Rounded, ensure_finite},
};

/// Borrowed view of a map that prints one `<key> \t <value> \n` line per entry.
pub struct Table<'a, K, V> {
    map: &'a IndexMap<K, V>,
    precision: usize,
}

impl<'a, K, V> Table<'a, K, V>
where
    V: Measure,
{
    /// Fails with [`StatsError::InvalidMap`] when a value is not finite.
    pub fn new(map: &'a IndexMap<K, V>, cfg: &Config) -> Result<Self, StatsError> {
        ensure_finite(map, "map must be a valid one")?;
        Ok(Self {
            map,
            precision: cfg.precision,
        })
    }
}

impl<K, V> fmt::Display for Table<'_, K, V>
where
    K: fmt::Display,
    V: Measure,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.map {
            let value = Rounded::new(value.measure(), self.precision);
            writeln!(f, "{key} \t {value} ")?;
        }
        Ok(())
    }
}

/// Render `map` as a table. The empty map renders as `""`.
pub fn get_print_statistics<K, V>(map: &IndexMap<K, V>, cfg: &Config) -> Result<String, StatsError>
where
    K: fmt::Display,
    V: Measure,
{
    Ok(Table::new(map, cfg)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_prints_nothing() {
        let map = IndexMap::<char, f64>::new();
        assert_eq!(get_print_statistics(&map, &Config::default()).unwrap(), "");
    }

    #[test]
    fn rounds_values() {
        let map: IndexMap<char, f64> = [('a', 1966.0), ('b', 2.25)].into_iter().collect();
        assert_eq!(
            get_print_statistics(&map, &Config::default()).unwrap(),
            "a \t 1966 \nb \t 2.25 \n"
        );
    }

    #[test]
    fn single_entry_has_trailing_break() {
        let map: IndexMap<&str, f64> = [("only", 1.0 / 3.0)].into_iter().collect();
        assert_eq!(
            get_print_statistics(&map, &Config::default()).unwrap(),
            "only \t 0.33 \n"
        );
    }

    #[test]
    fn prints_counts() {
        let map: IndexMap<char, usize> = [('z', 3), ('y', 1)].into_iter().collect();
        assert_eq!(
            get_print_statistics(&map, &Config::default()).unwrap(),
            "z \t 3 \ny \t 1 \n"
        );
    }

    #[test]
    fn one_line_per_entry_in_order() {
        let map: IndexMap<char, f64> = "qwerty".chars().map(|c| (c, 0.5)).collect();
        let out = get_print_statistics(&map, &Config::default()).unwrap();
        assert_eq!(out.matches('\n').count(), 6);
        let keys: String = out.lines().filter_map(|l| l.chars().next()).collect();
        assert_eq!(keys, "qwerty");
    }

    #[test]
    fn honours_precision() {
        let map: IndexMap<char, f64> = [('a', 0.123_456)].into_iter().collect();
        let cfg = Config::builder(10).precision(4).build().unwrap();
        assert_eq!(get_print_statistics(&map, &cfg).unwrap(), "a \t 0.1235 \n");
    }

    #[test]
    fn rejects_non_finite_values() {
        let map: IndexMap<char, f64> = [('a', f64::INFINITY)].into_iter().collect();
        let err = get_print_statistics(&map, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "map must be a valid one");
    }
}
