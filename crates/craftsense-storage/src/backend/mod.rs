//! # Storage Backends
//!
//! Durable local key-value storage: string keys, string (JSON) values.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       KeyValueStore                                     │
//! │             get(key) / set(key, value) / remove(key)                    │
//! │                 │                              │                        │
//! │                 ▼                              ▼                        │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐   │
//! │  │       MemoryStore        │   │           FileStore              │   │
//! │  │  HashMap behind a Mutex  │   │  <dir>/<key>.json per key        │   │
//! │  │  optional byte quota     │   │  temp file + rename on write     │   │
//! │  │  (tests, ephemeral runs) │   │  (the CLI's durable storage)     │   │
//! │  └──────────────────────────┘   └──────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All calls are synchronous. Stores share one backend through `&T` or
//! `Arc<T>`, both of which implement the trait.

use std::sync::Arc;

use crate::error::{StorageError, StorageResult};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A durable string-to-string map.
pub trait KeyValueStore {
    /// Reads a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Keys map onto file names, so they are restricted to a safe alphabet.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key.len() <= 128
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("workshopRegistrations").is_ok());
        assert!(validate_key("forum_posts-v2").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key("../cart").is_err());
        assert!(validate_key("a b").is_err());
        assert!(validate_key("käse").is_err());
        assert!(validate_key(&"k".repeat(129)).is_err());
    }

    #[test]
    fn test_shared_references_delegate() {
        let store = Arc::new(MemoryStore::new());
        let by_ref: &MemoryStore = &store;

        by_ref.set("cart", "{}").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("{}"));

        store.remove("cart").unwrap();
        assert_eq!(by_ref.get("cart").unwrap(), None);
    }
}
