//! # Application State
//!
//! Everything a command needs, opened once per invocation.
//!
//! ## State Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AppState                                        │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    AppConfig     │ │     Catalog      │ │   SharedStorage      │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • data_dir      │ │  • artisans      │ │  FileStore in        │   │
//! │  │  • share bps     │ │  • products      │ │  production,         │   │
//! │  │  • currency      │ │  • workshops     │ │  MemoryStore in      │   │
//! │  │                  │ │  • resources     │ │  tests               │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────┬───────────┘   │
//! │                                                       │               │
//! │                cart_store() / workshop_store() / forum_store()        │
//! │                (each rehydrates from the shared backend)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{AppConfig, ConfigError, ConfigOverrides, ENV_PREFIX};

use std::sync::Arc;

use tracing::{debug, info};

use craftsense_core::Catalog;
use craftsense_storage::{CartStore, FileStore, ForumStore, KeyValueStore, WorkshopStore};

use crate::error::AppResult;

/// Catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Storage backend handle shared by all stores.
pub type SharedStorage = Arc<dyn KeyValueStore>;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    storage: SharedStorage,
}

impl AppState {
    /// Loads the catalog and opens file storage under `config.data_dir`.
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let catalog = load_catalog(&config)?;
        let storage = FileStore::open(&config.data_dir)?;
        info!(data_dir = %config.data_dir.display(), "Storage opened");

        Ok(AppState::with_storage(config, catalog, storage))
    }

    pub fn with_storage(
        config: AppConfig,
        catalog: Catalog,
        storage: impl KeyValueStore + 'static,
    ) -> Self {
        AppState {
            config,
            catalog,
            storage: Arc::new(storage),
        }
    }

    pub fn cart_store(&self) -> CartStore<SharedStorage> {
        CartStore::open(Arc::clone(&self.storage))
    }

    pub fn workshop_store(&self) -> WorkshopStore<SharedStorage> {
        WorkshopStore::open(Arc::clone(&self.storage))
    }

    pub fn forum_store(&self) -> ForumStore<SharedStorage> {
        ForumStore::open(Arc::clone(&self.storage), self.catalog.forum_posts())
    }

    /// The raw backend, for commands that work on keys directly.
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }
}

/// The configured catalog file, or the bundled one.
pub fn load_catalog(config: &AppConfig) -> AppResult<Catalog> {
    let catalog = match config.catalog_path {
        Some(ref path) => {
            debug!(?path, "Loading catalog from file");
            let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Catalog {
                path: path.clone(),
                source,
            })?;
            Catalog::from_json(&json)?
        }
        None => Catalog::from_json(BUNDLED_CATALOG)?,
    };

    debug!(
        artisans = catalog.artisans().len(),
        products = catalog.products().len(),
        workshops = catalog.workshops().len(),
        resources = catalog.resources().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = load_catalog(&AppConfig::default()).unwrap();

        assert_eq!(catalog.workshops().len(), 4);
        assert_eq!(catalog.resources().len(), 5);
        assert_eq!(catalog.forum_posts().len(), 2);
        for product in catalog.products() {
            assert!(
                catalog.artisan(&product.artisan_id).is_some(),
                "{} has no artisan",
                product.id
            );
        }
    }

    #[test]
    fn test_catalog_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"products": []}"#).unwrap();

        let config = AppConfig {
            catalog_path: Some(path),
            ..AppConfig::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert!(catalog.products().is_empty());
        assert!(catalog.workshops().is_empty());
    }

    #[test]
    fn test_catalog_errors_are_config_errors() {
        let dir = TempDir::new().unwrap();

        let missing = AppConfig {
            catalog_path: Some(dir.path().join("missing.json")),
            ..AppConfig::default()
        };
        assert_eq!(load_catalog(&missing).unwrap_err().code, ErrorCode::ConfigError);

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = AppConfig {
            catalog_path: Some(path),
            ..AppConfig::default()
        };
        assert_eq!(load_catalog(&broken).unwrap_err().code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_open_uses_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("data"),
            ..AppConfig::default()
        };

        let state = AppState::open(config).unwrap();
        let mut cart = state.cart_store();
        let product = state.catalog.product("p1").unwrap().clone();
        cart.add_item(craftsense_core::CartItemInput::from_product(
            &product,
            state.config.share_rate(),
        ))
        .unwrap();

        assert!(dir.path().join("data").join("cart.json").exists());
        assert_eq!(state.cart_store().items().len(), 1);
    }
}
