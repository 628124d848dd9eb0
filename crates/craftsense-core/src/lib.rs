//! # craftsense-core: Pure Business Logic for CraftSense
//!
//! This crate is the **heart** of CraftSense, the artisan marketplace. It
//! contains the state containers and catalog logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CraftSense Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front End (CLI / web pages)                     │   │
//! │  │   Marketplace ──► Cart     Workshops ──► Registrations         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           craftsense-storage (rehydrate, mutate, persist)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ craftsense-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │   cart   │ │ workshop │ │ catalog  │ │  forum   │          │   │
//! │  │   │   Cart   │ │ Registr. │ │  search  │ │  posts   │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Shopping cart reducer (add/remove/update/clear, totals)
//! - [`workshop`] - Workshop registration reducer (register/unregister)
//! - [`catalog`] - Static catalog and client-side search/filtering
//! - [`forum`] - Community forum board
//! - [`types`] - Catalog domain types (Artisan, Product, Workshop, ...)
//! - [`money`] - Whole-unit money type and artisan share math
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use craftsense_core::cart::{Cart, CartItemInput};
//! use craftsense_core::money::Money;
//!
//! let mut cart = Cart::new();
//! let input = CartItemInput::new("p1", "Block Printed Scarf", Money::new(100), Money::new(90));
//!
//! cart.add_item(input.clone()).unwrap();
//! cart.add_item(input).unwrap();
//!
//! assert_eq!(cart.items().len(), 1);
//! assert_eq!(cart.total(), Money::new(200));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod forum;
pub mod money;
pub mod types;
pub mod validation;
pub mod workshop;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartItemInput, CartTotals};
pub use catalog::{ArtisanListing, Catalog, ALL_CATEGORIES};
pub use error::{CoreError, CoreResult, ValidationError};
pub use forum::{Comment, ForumBoard, ForumPost, PostDraft};
pub use money::{Money, ShareRate};
pub use types::*;
pub use workshop::{WorkshopRegistration, WorkshopRegistrations};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Share of a product's price that goes to the artisan, in basis points.
///
/// ## Business Reason
/// The marketplace passes 90% of every sale on to the producer.
pub const DEFAULT_ARTISAN_SHARE_BPS: u32 = 9000;

/// Author name attached to posts and comments (there are no accounts).
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";
