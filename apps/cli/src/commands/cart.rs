//! # Cart Commands
//!
//! Shopping cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   cart add    ┌──────────┐   cart clear   ┌──────────┐   │
//! │  │  Empty   │──────────────►│ In Cart  │───────────────►│  Empty   │   │
//! │  │  Cart    │               │          │                │  Cart    │   │
//! │  └──────────┘               └──────────┘                └──────────┘   │
//! │                                  │  ▲                                   │
//! │                        cart set  │  │  cart add (same id: qty += n)    │
//! │                     cart remove  ▼  │                                   │
//! │                             (set 0 = remove)                            │
//! │                                                                         │
//! │  Every mutation is written to <data_dir>/cart.json before returning.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use craftsense_core::{CartItem, CartItemInput, CartTotals};
use craftsense_storage::CartStore;

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState, SharedStorage};

/// Cart contents including calculated totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&CartStore<SharedStorage>> for CartResponse {
    fn from(store: &CartStore<SharedStorage>) -> Self {
        CartResponse {
            items: store.items().to_vec(),
            totals: store.totals(),
        }
    }
}

/// Result of a cart mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub message: String,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn show(state: &AppState) -> AppResult<CartResponse> {
    debug!("cart show command");
    Ok(CartResponse::from(&state.cart_store()))
}

/// Adds a catalog product, merging with an existing line.
///
/// The artisan share is derived from the configured share rate when the
/// product first enters the cart.
pub fn add(state: &AppState, product_id: &str, quantity: i64) -> AppResult<CartUpdate> {
    debug!(product_id, quantity, "cart add command");

    let product = state.catalog.product(product_id)?;
    let input = CartItemInput::from_product(product, state.config.share_rate()).with_quantity(quantity);

    let mut store = state.cart_store();
    store.add_item(input)?;

    Ok(CartUpdate {
        message: format!("Added {} x {}", quantity, product.name),
        cart: CartResponse::from(&store),
    })
}

/// Removes a line. Absent ids are reported, not an error.
pub fn remove(state: &AppState, product_id: &str) -> AppResult<CartUpdate> {
    debug!(product_id, "cart remove command");

    let mut store = state.cart_store();
    let message = if store.remove_item(product_id) {
        format!("Removed {}", product_id)
    } else {
        format!("{} is not in the cart", product_id)
    };

    Ok(CartUpdate {
        message,
        cart: CartResponse::from(&store),
    })
}

/// Sets a line's quantity. Zero or less removes the line.
pub fn set_quantity(state: &AppState, product_id: &str, quantity: i64) -> AppResult<CartUpdate> {
    debug!(product_id, quantity, "cart set command");

    let mut store = state.cart_store();
    let found = store.update_quantity(product_id, quantity)?;

    let message = match (found, quantity > 0) {
        (false, _) => format!("{} is not in the cart", product_id),
        (true, true) => format!("Set {} to {}", product_id, quantity),
        (true, false) => format!("Removed {}", product_id),
    };

    Ok(CartUpdate {
        message,
        cart: CartResponse::from(&store),
    })
}

/// Empties the cart.
pub fn clear(state: &AppState) -> AppResult<CartUpdate> {
    debug!("cart clear command");

    let mut store = state.cart_store();
    store.clear_cart();

    Ok(CartUpdate {
        message: "Cart cleared".to_string(),
        cart: CartResponse::from(&store),
    })
}

impl Render for CartResponse {
    fn render(&self, config: &AppConfig) -> String {
        if self.items.is_empty() {
            return "Your cart is empty".to_string();
        }

        let mut out = String::new();
        for item in &self.items {
            out.push_str(&format!(
                "{:<8} {:<36} {:>4} x {:>8} = {:>10}\n",
                item.id,
                item.name,
                item.quantity,
                config.format_currency(item.price),
                config.format_currency(item.line_total()),
            ));
        }

        let t = &self.totals;
        out.push_str(&format!(
            "\n{} items ({} units)\nTotal:            {}\nTo artisans:      {}\nPlatform:         {}",
            t.item_count,
            t.total_quantity,
            config.format_currency(t.total),
            config.format_currency(t.artisan_total),
            config.format_currency(t.platform_total),
        ));
        out
    }
}

impl Render for CartUpdate {
    fn render(&self, config: &AppConfig) -> String {
        format!("{}\n\n{}", self.message, self.cart.render(config))
    }
}
