//! Frequency engine: occurrence counts and relative frequencies.
//!
//! Both maps keep first-occurrence order, which is what the renderers print.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::trace;

/// Unit → occurrence count, in first-occurrence order.
pub type CountMap<K> = IndexMap<K, usize>;

/// Unit → share of the total, in the order of the source [`CountMap`].
pub type FrequencyMap<K> = IndexMap<K, f64>;

/// Count every item of `items`. Equal items share one entry.
pub fn item_counts<K, I>(items: I) -> CountMap<K>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts = CountMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    trace!(distinct = counts.len(), "counted items");
    counts
}

/// Divide each count by the sum of all counts.
///
/// An empty map yields an empty map. A non-empty map whose counts are all zero
/// maps every unit to `0.0` instead of NaN.
#[allow(clippy::cast_precision_loss)]
pub fn item_frequencies<K>(counts: &CountMap<K>) -> FrequencyMap<K>
where
    K: Hash + Eq + Clone,
{
    if counts.is_empty() {
        return FrequencyMap::new();
    }

    let total: usize = counts.values().sum();
    trace!(total, distinct = counts.len(), "deriving frequencies");
    if total == 0 {
        return counts.keys().map(|k| (k.clone(), 0.0)).collect();
    }

    let total = total as f64;
    counts
        .iter()
        .map(|(k, &n)| (k.clone(), n as f64 / total))
        .collect()
}
