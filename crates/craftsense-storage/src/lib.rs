//! # craftsense-storage: Durable Local Storage for CraftSense
//!
//! Persists the user's cart, workshop registrations and forum board to a
//! local key-value store, one JSON document per key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CraftSense Data Flow                              │
//! │                                                                         │
//! │  CLI command (cart add p1)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                craftsense-storage (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌────────────────┐   ┌───────────────┐  │   │
//! │  │   │   CartStore    │   │ WorkshopStore  │   │  ForumStore   │  │   │
//! │  │   │   "cart"       │   │ "workshop-     │   │ "forumPosts"  │  │   │
//! │  │   │                │   │ Registrations" │   │               │  │   │
//! │  │   └───────┬────────┘   └───────┬────────┘   └──────┬────────┘  │   │
//! │  │           └────────────────────┼───────────────────┘           │   │
//! │  │                                ▼                               │   │
//! │  │                    KeyValueStore (backend)                     │   │
//! │  │                  MemoryStore  |  FileStore                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/craftsense/cart.json, workshopRegistrations.json, ...  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The [`KeyValueStore`] trait and its implementations
//! - [`store`] - Stores that rehydrate on open and persist after mutating
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use craftsense_core::{CartItemInput, Money};
//! use craftsense_storage::{CartStore, MemoryStore};
//!
//! let storage = MemoryStore::new();
//!
//! let mut cart = CartStore::open(&storage);
//! cart.add_item(CartItemInput::new("p1", "Terracotta Vase", Money::new(100), Money::new(90)))?;
//!
//! // A fresh store on the same backend sees the persisted cart
//! let reloaded = CartStore::open(&storage);
//! assert_eq!(reloaded.total(), Money::new(100));
//! # Ok::<(), craftsense_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use store::{CartStore, ForumStore, WorkshopStore};

// =============================================================================
// Storage Keys
// =============================================================================

/// Key holding `{"items": [...]}`.
pub const CART_KEY: &str = "cart";

/// Key holding `{"registrations": [...]}`.
pub const WORKSHOP_KEY: &str = "workshopRegistrations";

/// Key holding `{"posts": [...]}`.
pub const FORUM_KEY: &str = "forumPosts";
