//! Keyed counters with default-zero semantics

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Accumulates signed 64-bit values per key.
///
/// A key that was never written reads as `0` and is materialized on its
/// first increment. Values are not restricted to tallies: [`Counter::put`]
/// stores derived figures (averages, ratios) next to the raw counts.
///
/// Increments saturate at `i64::MIN`/`i64::MAX` instead of wrapping.
///
/// `Counter` itself is not synchronized; share it through
/// [`GroupedCounters`](crate::GroupedCounters), which locks per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K> {
    counters: BTreeMap<K, i64>,
}

impl<K: Ord> Counter<K> {
    pub fn new() -> Self {
        Self {
            counters: BTreeMap::new(),
        }
    }

    /// Add `amount` to `key`, returning the new total.
    pub fn increment_by(&mut self, key: K, amount: i64) -> i64 {
        let value = self.counters.entry(key).or_insert(0);
        match value.checked_add(amount) {
            Some(total) => *value = total,
            None => {
                *value = value.saturating_add(amount);
                tracing::warn!(
                    amount,
                    saturated_at = *value,
                    "counter overflow, value saturated"
                );
            }
        }
        *value
    }

    pub fn increment(&mut self, key: K) -> i64 {
        self.increment_by(key, 1)
    }

    pub fn get(&self, key: &K) -> i64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Overwrite `key` with `value`, returning `value`.
    pub fn put(&mut self, key: K, value: i64) -> i64 {
        self.counters.insert(key, value);
        value
    }

    pub fn contains(&self, key: &K) -> bool {
        self.counters.contains_key(key)
    }

    /// Live view of every touched key, in key order.
    pub fn metrics(&self) -> &BTreeMap<K, i64> {
        &self.counters
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &i64)> {
        self.counters.iter()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl<K: Ord> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adds each `(key, amount)` pair.
impl<K: Ord> Extend<(K, i64)> for Counter<K> {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (key, amount) in iter {
            self.increment_by(key, amount);
        }
    }
}

impl<K: Ord> FromIterator<(K, i64)> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

impl<'a, K> IntoIterator for &'a Counter<K> {
    type Item = (&'a K, &'a i64);
    type IntoIter = btree_map::Iter<'a, K, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_key_reads_zero() {
        let counter: Counter<&str> = Counter::new();
        assert_eq!(counter.get(&"pass"), 0);
        assert!(!counter.contains(&"pass"));
        assert!(counter.is_empty());
    }

    #[test]
    fn increments_are_additive() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment_by("skip", 7), 7);
        assert_eq!(counter.increment_by("skip", 5), 12);
        assert_eq!(counter.get(&"skip"), 12);
    }

    #[test]
    fn increment_adds_one() {
        let mut a = Counter::new();
        let mut b = Counter::new();
        a.increment("pass");
        b.increment_by("pass", 1);
        assert_eq!(a, b);
        assert_eq!(a.increment("pass"), 2);
    }

    #[test]
    fn put_overrides_accumulated_value() {
        let mut counter = Counter::new();
        counter.increment_by("avg", 40);
        assert_eq!(counter.put("avg", 3), 3);
        assert_eq!(counter.get(&"avg"), 3);

        // Increments continue from the stored value
        assert_eq!(counter.increment("avg"), 4);
    }

    #[test]
    fn negative_amounts_are_allowed() {
        let mut counter = Counter::new();
        counter.increment_by("drift", 10);
        assert_eq!(counter.increment_by("drift", -15), -5);
    }

    #[test]
    fn overflow_saturates() {
        let mut counter = Counter::new();
        counter.put("big", i64::MAX - 1);
        assert_eq!(counter.increment_by("big", 10), i64::MAX);
        assert_eq!(counter.increment("big"), i64::MAX);

        counter.put("small", i64::MIN + 1);
        assert_eq!(counter.increment_by("small", -10), i64::MIN);
    }

    #[test]
    fn metrics_iterate_in_key_order() {
        let mut counter = Counter::new();
        counter.increment("warn");
        counter.increment_by("fail", 2);
        counter.put("exception", 9);

        let keys: Vec<_> = counter.metrics().keys().copied().collect();
        assert_eq!(keys, vec!["exception", "fail", "warn"]);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn collect_sums_duplicate_keys() {
        let counter: Counter<u8> = vec![(1, 2), (2, 5), (1, 3)].into_iter().collect();
        assert_eq!(counter.get(&1), 5);
        assert_eq!(counter.get(&2), 5);

        let pairs: Vec<_> = (&counter).into_iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(1, 5), (2, 5)]);
    }
}
