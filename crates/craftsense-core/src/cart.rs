//! # Cart
//!
//! The shopping cart reducer: an ordered list of line items keyed by
//! product id.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation               Existing id             Absent id              │
//! │  ─────────               ───────────             ─────────              │
//! │                                                                         │
//! │  add_item(input) ──────► quantity += input.qty   push to the end       │
//! │                          (name/price/share kept)                        │
//! │                                                                         │
//! │  update_quantity(n) ───► n <= 0: remove          no-op                  │
//! │                          n > 0:  quantity = n                           │
//! │                          n > MAX_QUANTITY: rejected, cart unchanged     │
//! │                                                                         │
//! │  remove_item() ────────► removed                 no-op                  │
//! │                                                                         │
//! │  clear() ──────────────► everything removed                             │
//! │                                                                         │
//! │  total() ──────────────► Σ price × quantity (recomputed on read)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`
//! - Every item has `1 <= quantity <= MAX_QUANTITY`
//! - Every item has `0 <= artisan_share <= price`
//!
//! The reducer never touches storage. Persisting after each mutation is
//! the job of `craftsense-storage`'s `CartStore`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, ShareRate};
use crate::types::Product;
use crate::validation::{
    validate_artisan_share, validate_id, validate_name, validate_price, validate_quantity,
    ValidationResult, MAX_QUANTITY,
};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// `name`, `price`, and `artisan_share` are frozen when the product is
/// first added. Adding the same product again only bumps `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id (unique key within the cart)
    pub id: String,

    /// Product name at time of adding
    pub name: String,

    /// Unit price at time of adding
    pub price: Money,

    /// Portion of the unit price paid to the artisan
    pub artisan_share: Money,

    /// Quantity in cart, always >= 1
    pub quantity: i64,
}

impl CartItem {
    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Artisan's portion of the line total.
    pub fn artisan_total(&self) -> Money {
        self.artisan_share.multiply_quantity(self.quantity)
    }

    /// Checks a line that did not come through [`Cart::add_item`], such as
    /// one read back from storage.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_id("id", &self.id)?;
        validate_price(self.price)?;
        validate_artisan_share(self.artisan_share, self.price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

// =============================================================================
// Cart Item Input
// =============================================================================

fn default_quantity() -> i64 {
    1
}

/// Request to add a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub artisan_share: Money,

    /// Quantity to add (default: 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl CartItemInput {
    /// Creates an input for a single unit.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        artisan_share: Money,
    ) -> Self {
        CartItemInput {
            id: id.into(),
            name: name.into(),
            price,
            artisan_share,
            quantity: default_quantity(),
        }
    }

    /// Sets the quantity to add.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builds an input from a catalog product, deriving the artisan share
    /// from `rate` (rounded down).
    ///
    /// ## Example
    /// ```rust
    /// use craftsense_core::cart::CartItemInput;
    /// use craftsense_core::money::{Money, ShareRate};
    /// use craftsense_core::types::Product;
    ///
    /// let product = Product {
    ///     id: "p7".into(),
    ///     name: "Brass Diya".into(),
    ///     description: "Hand-cast oil lamp".into(),
    ///     price: Money::new(199),
    ///     image: String::new(),
    ///     category: "Metalwork".into(),
    ///     artisan_id: "a3".into(),
    /// };
    /// let input = CartItemInput::from_product(&product, ShareRate::default());
    /// assert_eq!(input.artisan_share, Money::new(179));
    /// ```
    pub fn from_product(product: &Product, rate: ShareRate) -> Self {
        CartItemInput::new(
            product.id.clone(),
            product.name.clone(),
            product.price,
            product.price.share(rate),
        )
    }

    /// Checks the input against the cart's item invariants.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_id("id", &self.id)?;
        validate_name("name", &self.name)?;
        validate_price(self.price)?;
        validate_artisan_share(self.artisan_share, self.price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

impl From<CartItemInput> for CartItem {
    fn from(input: CartItemInput) -> Self {
        CartItem {
            id: input.id,
            name: input.name,
            price: input.price,
            artisan_share: input.artisan_share,
            quantity: input.quantity,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Serialized as `{"items": [...]}`, which is also the persisted layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from already-persisted items, as-is.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds a product to the cart or increases its quantity.
    ///
    /// ## Behavior
    /// - Invalid input: rejected, cart unchanged
    /// - Product already in cart: quantity increases, other fields kept
    /// - Product not in cart: appended
    pub fn add_item(&mut self, input: CartItemInput) -> CoreResult<()> {
        input.validate()?;

        if let Some(item) = self.items.iter_mut().find(|i| i.id == input.id) {
            let current = item.quantity;
            item.quantity = current
                .checked_add(input.quantity)
                .filter(|q| *q <= MAX_QUANTITY)
                .ok_or_else(|| CoreError::QuantityOverflow {
                    id: input.id.clone(),
                    current,
                    added: input.quantity,
                    max: MAX_QUANTITY,
                })?;
            return Ok(());
        }

        self.items.push(CartItem::from(input));
        Ok(())
    }

    /// Removes a line by product id.
    ///
    /// Returns `true` if a line was removed. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - `quantity > MAX_QUANTITY`: rejected, cart unchanged
    /// - Absent id: no-op
    ///
    /// Returns `true` if a line was found.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<bool> {
        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }
        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops later lines whose id already appeared, keeping the first.
    ///
    /// Returns the number of lines dropped.
    pub fn dedup_by_id(&mut self) -> usize {
        let initial_len = self.items.len();
        let mut seen = HashSet::new();
        self.items.retain(|i| seen.insert(i.id.clone()));
        initial_len - self.items.len()
    }

    /// Drops lines that break the item invariants (see [`CartItem::validate`]).
    ///
    /// Returns the number of lines dropped.
    pub fn drop_invalid(&mut self) -> usize {
        let initial_len = self.items.len();
        self.items.retain(|i| i.validate().is_ok());
        initial_len - self.items.len()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ artisan_share × quantity.
    pub fn artisan_total(&self) -> Money {
        self.items.iter().map(CartItem::artisan_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
    /// What the artisans receive.
    pub artisan_total: Money,
    /// What the platform keeps (total - artisan_total).
    pub platform_total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        let artisan_total = cart.artisan_total();
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total,
            artisan_total,
            platform_total: total - artisan_total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
