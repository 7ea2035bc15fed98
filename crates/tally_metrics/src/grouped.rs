//! One counter per group, created eagerly for every group value

use crate::{Counter, Dimension, MetricsError};
use dashmap::DashMap;
use parking_lot::{Mutex, RawMutex};
use std::sync::Arc;

/// Owned lock on one group's counter.
pub type CounterGuard<K> = parking_lot::lock_api::ArcMutexGuard<RawMutex, Counter<K>>;

/// Side-by-side counters, one per value of the group dimension `G`.
///
/// Every group in `G::ALL` gets an empty [`Counter`] at construction, so
/// the map is only ever read afterwards. Lookups take a shared shard lock
/// just long enough to clone the group's handle; read-modify-write runs
/// under that group's own mutex, so holding one group never blocks another.
pub struct GroupedCounters<G: Dimension, K> {
    groups: DashMap<G, Arc<Mutex<Counter<K>>>>,
}

impl<G: Dimension, K: Ord> GroupedCounters<G, K> {
    pub fn new() -> Self {
        let groups = DashMap::with_capacity(G::ALL.len());
        for &group in G::ALL {
            groups.insert(group, Arc::new(Mutex::new(Counter::new())));
        }
        tracing::debug!(groups = groups.len(), "grouped counters initialized");

        Self { groups }
    }

    fn handle(&self, group: G) -> Result<Arc<Mutex<Counter<K>>>, MetricsError> {
        self.groups
            .get(&group)
            .map(|counter| Arc::clone(counter.value()))
            .ok_or_else(|| MetricsError::GroupNotFound {
                group: group.to_string(),
            })
    }

    /// Exclusive access to `group`'s counter.
    ///
    /// Other groups stay available while the guard is held; locking the same
    /// group again from this thread deadlocks.
    pub fn counter_for(&self, group: G) -> Result<CounterGuard<K>, MetricsError> {
        Ok(self.handle(group)?.lock_arc())
    }

    /// Run `f` with `group`'s counter locked.
    ///
    /// Use this for derived values that read and write several keys at once.
    pub fn with_counter<R>(
        &self,
        group: G,
        f: impl FnOnce(&mut Counter<K>) -> R,
    ) -> Result<R, MetricsError> {
        let mut counter = self.counter_for(group)?;
        Ok(f(&mut *counter))
    }

    pub fn increment(&self, group: G, key: K) -> Result<i64, MetricsError> {
        self.increment_by(group, key, 1)
    }

    pub fn increment_by(&self, group: G, key: K, amount: i64) -> Result<i64, MetricsError> {
        Ok(self.counter_for(group)?.increment_by(key, amount))
    }

    pub fn get(&self, group: G, key: &K) -> Result<i64, MetricsError> {
        Ok(self.handle(group)?.lock().get(key))
    }

    pub fn put(&self, group: G, key: K, value: i64) -> Result<i64, MetricsError> {
        Ok(self.counter_for(group)?.put(key, value))
    }

    /// Copy of every group's values, groups in declaration order.
    pub fn snapshot(&self) -> Vec<(G, Vec<(K, i64)>)>
    where
        K: Clone,
    {
        G::ALL
            .iter()
            .filter_map(|&group| {
                let handle = self.handle(group).ok()?;
                let counter = handle.lock();
                let values = counter
                    .iter()
                    .map(|(key, &value)| (key.clone(), value))
                    .collect();
                Some((group, values))
            })
            .collect()
    }
}

impl<G: Dimension, K: Ord> Default for GroupedCounters<G, K> {
    fn default() -> Self {
        Self::new()
    }
}
