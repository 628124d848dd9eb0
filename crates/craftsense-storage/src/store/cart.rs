//! # Cart Store
//!
//! The persisted shopping cart.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart add p1                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::add_item(input)                                            │
//! │       ├── Cart::add_item(input)?      invalid input → CoreError        │
//! │       └── save()                                                        │
//! │             └── "cart" → {"items":[{id,name,price,artisanShare,...}]}  │
//! │                   write failed → WARN only, call still succeeds         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use craftsense_core::{Cart, CartItem, CartItemInput, CartTotals, CoreResult, Money};
use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::StorageResult;
use crate::store::{persist, rehydrate, report_duplicates, report_invalid, save};
use crate::CART_KEY;

/// Shopping cart bound to a storage backend.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrates the cart from `storage`.
    ///
    /// Never fails. Missing or corrupt data gives an empty cart. Lines
    /// that break the item invariants (quantity out of range, share above
    /// price, negative price) are dropped, then duplicate ids are dropped
    /// (first one wins).
    pub fn open(storage: S) -> Self {
        let mut cart: Cart = rehydrate(&storage, CART_KEY);
        report_invalid(CART_KEY, cart.drop_invalid());
        report_duplicates(CART_KEY, cart.dedup_by_id());

        debug!(items = cart.item_count(), "Cart store opened");
        CartStore { storage, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Adds a product or bumps its quantity, then persists.
    pub fn add_item(&mut self, input: CartItemInput) -> CoreResult<()> {
        debug!(id = %input.id, quantity = input.quantity, "add_item");
        self.cart.add_item(input)?;
        self.save();
        Ok(())
    }

    /// Removes a line, then persists. Returns `true` if it was present.
    pub fn remove_item(&mut self, id: &str) -> bool {
        debug!(id, "remove_item");
        let removed = self.cart.remove_item(id);
        self.save();
        removed
    }

    /// Sets a line's quantity (`<= 0` removes it), then persists.
    ///
    /// A quantity above the line limit is rejected and nothing is written.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<bool> {
        debug!(id, quantity, "update_quantity");
        let found = self.cart.update_quantity(id, quantity)?;
        self.save();
        Ok(found)
    }

    /// Empties the cart, then persists.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
        self.save();
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Writes the current cart, returning any storage error.
    pub fn persist(&self) -> StorageResult<()> {
        persist(&self.storage, CART_KEY, &self.cart)
    }

    fn save(&self) {
        save(&self.storage, CART_KEY, &self.cart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::error::StorageError;
    use crate::store::test_support::UnavailableStore;
    use craftsense_core::validation::MAX_QUANTITY;
    use craftsense_core::CoreError;

    fn input(id: &str, price: i64) -> CartItemInput {
        CartItemInput::new(id, format!("Item {}", id), Money::new(price), Money::new(price * 9 / 10))
    }

    #[test]
    fn test_add_twice_merges_and_persists() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);

        store.add_item(input("p1", 100)).unwrap();
        store.add_item(input("p1", 100)).unwrap();

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
        assert_eq!(store.total(), Money::new(200));

        let reloaded = CartStore::open(&storage);
        assert_eq!(reloaded.cart(), store.cart());
    }

    #[test]
    fn test_update_to_zero_removes() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(input("p1", 100).with_quantity(2)).unwrap();

        assert!(store.update_quantity("p1", 0).unwrap());
        assert!(store.cart().is_empty());
        assert_eq!(store.total(), Money::zero());

        assert!(CartStore::open(&storage).cart().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(input("p1", 100)).unwrap();
        let before = store.cart().clone();

        assert!(!store.remove_item("missing"));
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(input("p1", 100)).unwrap();
        store.add_item(input("p2", 250)).unwrap();

        store.clear_cart();
        assert_eq!(storage.get(CART_KEY).unwrap().as_deref(), Some(r#"{"items":[]}"#));
    }

    #[test]
    fn test_invalid_input_rejected_and_not_persisted() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);

        let bad = CartItemInput::new("p1", "Vase", Money::new(100), Money::new(150));
        assert!(matches!(store.add_item(bad), Err(CoreError::Validation(_))));
        assert!(store.cart().is_empty());
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_failure_does_not_fail_mutation() {
        let mut store = CartStore::open(UnavailableStore);

        store.add_item(input("p1", 100)).unwrap();
        assert_eq!(store.items().len(), 1);
        assert!(matches!(store.persist(), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn test_quota_exceeded_keeps_last_good_copy() {
        let storage = MemoryStore::with_quota(120);
        let mut store = CartStore::open(&storage);

        store.add_item(input("p1", 100)).unwrap();
        let persisted = storage.get(CART_KEY).unwrap();
        assert!(persisted.is_some());

        store.add_item(input("p2", 200)).unwrap();
        assert_eq!(store.items().len(), 2);
        assert!(matches!(store.persist(), Err(StorageError::QuotaExceeded { .. })));
        assert_eq!(storage.get(CART_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_corrupt_blob_opens_empty() {
        let storage = MemoryStore::new();
        storage.set(CART_KEY, "{\"items\": [").unwrap();

        let mut store = CartStore::open(&storage);
        assert!(store.cart().is_empty());

        store.add_item(input("p1", 100)).unwrap();
        assert_eq!(CartStore::open(&storage).items().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_dropped_on_open() {
        let storage = MemoryStore::new();
        storage
            .set(
                CART_KEY,
                r#"{"items":[
                    {"id":"p1","name":"First","price":100,"artisanShare":90,"quantity":1},
                    {"id":"p2","name":"Other","price":50,"artisanShare":45,"quantity":3},
                    {"id":"p1","name":"Second","price":999,"artisanShare":0,"quantity":7}
                ]}"#,
            )
            .unwrap();

        let store = CartStore::open(&storage);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(store.cart().get("p1").unwrap().name, "First");
        assert_eq!(store.total(), Money::new(250));
    }

    #[test]
    fn test_oversized_quantity_rejected_and_not_persisted() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(input("p1", 1200)).unwrap();
        let persisted = storage.get(CART_KEY).unwrap();

        assert!(matches!(
            store.update_quantity("p1", i64::MAX),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            store.add_item(input("p1", 1200).with_quantity(10_000_000_000_000_000)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            store.add_item(input("p1", 1200).with_quantity(MAX_QUANTITY)),
            Err(CoreError::QuantityOverflow { .. })
        ));

        assert_eq!(store.totals().total_quantity, 1);
        assert_eq!(store.total(), Money::new(1200));
        assert_eq!(storage.get(CART_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_invalid_lines_dropped_on_open() {
        let storage = MemoryStore::new();
        storage
            .set(
                CART_KEY,
                r#"{"items":[
                    {"id":"p1","name":"Bowl","price":1200,"artisanShare":1080,"quantity":2},
                    {"id":"p2","name":"Zero","price":850,"artisanShare":765,"quantity":0},
                    {"id":"p3","name":"Negative","price":100,"artisanShare":90,"quantity":-4},
                    {"id":"p4","name":"Greedy","price":100,"artisanShare":150,"quantity":1},
                    {"id":"p5","name":"Huge","price":1200,"artisanShare":1080,"quantity":9223372036854775807}
                ]}"#,
            )
            .unwrap();

        let store = CartStore::open(&storage);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1"]);

        let totals = store.totals();
        assert_eq!(totals.total, Money::new(2400));
        assert_eq!(totals.platform_total, Money::new(240));
    }
}
