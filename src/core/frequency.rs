//! Concurrent word-frequency table.

use dashmap::DashMap;

/// Token to occurrence-count map shared by many concurrent writers.
///
/// Backed by a sharded [`DashMap`]: an increment holds the shard lock for its
/// key for the whole read-add-store, so concurrent increments never lose
/// updates. Iteration order is unspecified.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: DashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `token`, inserting it with count 1 if absent.
    pub fn increment(&self, token: &str) {
        if let Some(mut count) = self.counts.get_mut(token) {
            *count += 1;
            return;
        }
        *self.counts.entry(token.to_owned()).or_insert(0) += 1;
    }

    /// Visit every `(token, count)` entry.
    ///
    /// Entries are snapshotted before the visitor runs, so the visitor holds no
    /// shard lock and may delete from this same table. An entry deleted by
    /// another thread after the snapshot is still visited once.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, u64),
    {
        for (token, count) in self.snapshot() {
            visitor(&token, count);
        }
    }

    /// Remove `token` if present.
    pub fn delete(&self, token: &str) -> bool {
        self.counts.remove(token).is_some()
    }

    /// Current count for `token`, if present
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).map(|count| *count)
    }

    /// Whether `token` is present
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|entry| *entry.value()).sum()
    }

    /// Snapshot of the current keys
    pub fn keys(&self) -> Vec<String> {
        self.counts.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Snapshot of the current entries
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Consume the table into its entries
    pub fn into_entries(self) -> Vec<(String, u64)> {
        self.counts.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let table = Self::new();
        for (token, count) in iter {
            *table.counts.entry(token.into()).or_insert(0) += count;
        }
        table
    }
}
