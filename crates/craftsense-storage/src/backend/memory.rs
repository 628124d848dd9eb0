//! In-process storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// A `HashMap` behind `Arc<Mutex<_>>`.
///
/// Clones share the same map, so a second store opened on a clone sees
/// exactly what the first one persisted (a page reload, in effect).
///
/// ## Quota
/// With [`MemoryStore::with_quota`], a `set` that would push the summed
/// size of all keys and values past the limit fails with
/// [`StorageError::QuotaExceeded`] and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits total stored bytes (keys + values).
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }

    fn usage(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.lock()?;

        if let Some(quota) = self.quota {
            let existing = entries.get(key).map_or(0, |v| key.len() + v.len());
            let used = Self::usage(&entries) - existing;
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);

            if needed > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
impl MemoryStore {
    fn used_bytes(&self) -> StorageResult<usize> {
        Ok(Self::usage(&*self.lock()?))
    }
}
