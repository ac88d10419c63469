//! In-memory key-value store.
//!
//! Usage is measured like browser local storage: the sum of key and value
//! lengths in bytes. An optional quota makes write failures reproducible.

use super::{KvStore, KvWrite, StorageError, StorageResult};
use std::collections::BTreeMap;

/// `BTreeMap`-backed store used by tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects batches pushing usage above `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn set_quota(&mut self, quota_bytes: Option<usize>) {
        self.quota_bytes = quota_bytes;
    }

    /// Current usage in bytes (keys plus values).
    pub fn used_bytes(&self) -> usize {
        usage(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every entry, for state comparisons in tests.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        Ok(self
            .entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn apply(&mut self, batch: &[KvWrite]) -> StorageResult<()> {
        let mut staged = self.entries.clone();
        for write in batch {
            match write {
                KvWrite::Set { key, value } => {
                    staged.insert(key.clone(), value.clone());
                    if let Some(quota_bytes) = self.quota_bytes {
                        let required_bytes = usage(&staged);
                        if required_bytes > quota_bytes {
                            return Err(StorageError::QuotaExceeded {
                                key: key.clone(),
                                required_bytes,
                                quota_bytes,
                            });
                        }
                    }
                }
                KvWrite::Remove { key } => {
                    staged.remove(key);
                }
            }
        }

        self.entries = staged;
        Ok(())
    }
}

fn usage(entries: &BTreeMap<String, String>) -> usize {
    entries
        .iter()
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStore;
    use crate::storage::{KvStore, KvWrite, StorageError};

    #[test]
    fn prefix_scan_stops_at_first_non_matching_key() {
        let mut store = MemoryKvStore::new();
        store.set("a_1", "x").unwrap();
        store.set("a_2", "y").unwrap();
        store.set("b_1", "z").unwrap();

        assert_eq!(store.keys_with_prefix("a_").unwrap(), vec!["a_1", "a_2"]);
    }

    #[test]
    fn over_quota_batch_leaves_store_unchanged() {
        let mut store = MemoryKvStore::with_quota(10);
        store.set("k", "v").unwrap();
        let before = store.snapshot();

        let err = store
            .apply(&[
                KvWrite::set("small", "1"),
                KvWrite::set("large", "0123456789"),
            ])
            .unwrap_err();

        assert!(matches!(err, StorageError::QuotaExceeded { ref key, .. } if key == "large"));
        assert_eq!(store.snapshot(), before);
    }
}
