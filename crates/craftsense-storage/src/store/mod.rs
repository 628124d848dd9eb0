//! # Stores
//!
//! Persisted state containers. Each store owns one piece of core state and
//! one storage key.
//!
//! ## Command Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Mutate, then Persist                                │
//! │                                                                         │
//! │  open(storage)                                                         │
//! │     └── rehydrate(key)                                                 │
//! │           ├── absent      → empty state                                │
//! │           ├── malformed   → empty state   (WARN)                       │
//! │           └── well-formed → loaded state, duplicate ids dropped (WARN) │
//! │                             and invalid cart lines dropped   (WARN)   │
//! │                                                                         │
//! │  store.add_item(..) / register(..) / create_post(..)                   │
//! │     ├── 1. mutate core state (validation errors returned to caller)   │
//! │     └── 2. save()                                                      │
//! │              └── persist() failed? → WARN, in-memory state stays       │
//! │                                                                         │
//! │  store.persist()  ← same write, but the error is returned              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`CartStore`] - shopping cart under [`CART_KEY`](crate::CART_KEY)
//! - [`WorkshopStore`] - registrations under [`WORKSHOP_KEY`](crate::WORKSHOP_KEY)
//! - [`ForumStore`] - forum board under [`FORUM_KEY`](crate::FORUM_KEY)

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::KeyValueStore;
use crate::error::{StorageError, StorageResult};

pub mod cart;
pub mod forum;
pub mod workshop;

pub use cart::CartStore;
pub use forum::ForumStore;
pub use workshop::WorkshopStore;

/// Reads and decodes the value under `key`.
///
/// Never fails: a missing key, an unreadable backend or a blob that does
/// not decode all yield `T::default()`. Only the last two are logged.
pub(crate) fn rehydrate<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No persisted state, starting empty");
            return T::default();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted state, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => {
            debug!(key, bytes = raw.len(), "Rehydrated persisted state");
            state
        }
        Err(e) => {
            warn!(key, error = %e, "Discarding malformed persisted state");
            T::default()
        }
    }
}

/// Encodes `state` and writes it under `key`.
pub(crate) fn persist<T, S>(storage: &S, key: &str, state: &T) -> StorageResult<()>
where
    T: Serialize,
    S: KeyValueStore,
{
    let json = serde_json::to_string(state).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })?;

    storage.set(key, &json)?;
    debug!(key, bytes = json.len(), "Persisted state");
    Ok(())
}

/// [`persist`] for the implicit write after a mutation: failures are logged
/// and dropped.
pub(crate) fn save<T, S>(storage: &S, key: &str, state: &T)
where
    T: Serialize,
    S: KeyValueStore,
{
    if let Err(e) = persist(storage, key, state) {
        warn!(key, error = %e, "Failed to persist state; keeping in-memory copy");
    }
}

/// Logs how many duplicate entries were dropped while loading.
pub(crate) fn report_duplicates(key: &str, dropped: usize) {
    if dropped > 0 {
        warn!(key, dropped, "Dropped duplicate ids from persisted state (kept first)");
    }
}

/// Logs how many entries breaking the item invariants were dropped while
/// loading.
pub(crate) fn report_invalid(key: &str, dropped: usize) {
    if dropped > 0 {
        warn!(key, dropped, "Dropped invalid entries from persisted state");
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::UnavailableStore;
    use super::*;
    use crate::backend::MemoryStore;
    use craftsense_core::Cart;

    #[test]
    fn test_rehydrate_absent_is_default() {
        let storage = MemoryStore::new();
        let cart: Cart = rehydrate(&storage, "cart");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rehydrate_malformed_is_default() {
        let storage = MemoryStore::new();
        for blob in ["", "not json", "[1,2,3]", r#"{"items":"nope"}"#, r#"{"items":[{"id":1}]}"#] {
            storage.set("cart", blob).unwrap();
            let cart: Cart = rehydrate(&storage, "cart");
            assert!(cart.is_empty(), "blob {:?} should rehydrate empty", blob);
        }
    }

    #[test]
    fn test_rehydrate_unreadable_backend_is_default() {
        let cart: Cart = rehydrate(&UnavailableStore, "cart");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persist_surfaces_errors_save_swallows_them() {
        let cart = Cart::new();
        assert!(matches!(
            persist(&UnavailableStore, "cart", &cart),
            Err(StorageError::Unavailable(_))
        ));

        save(&UnavailableStore, "cart", &cart);
    }
}
