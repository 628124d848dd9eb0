//! # Configuration
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --data-dir ./tmp --share-bps 8500                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CRAFTSENSE_DATA_DIR=/var/lib/craftsense                            │
//! │     CRAFTSENSE_ARTISAN_SHARE_BPS=9000                                  │
//! │     CRAFTSENSE_CURRENCY_SYMBOL=₹                                       │
//! │     CRAFTSENSE_CATALOG_PATH=./catalog.json                             │
//! │                                                                         │
//! │  3. TOML Config File (--config, or CRAFTSENSE_CONFIG)                  │
//! │     ~/.config/craftsense/config.toml (Linux)                           │
//! │     ~/Library/Application Support/com.craftsense.craftsense/... (macOS)│
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! data_dir = "/home/meera/.local/share/craftsense"
//! artisan_share_bps = 9000   # 90% of every sale goes to the artisan
//! currency_symbol = "₹"
//! catalog_path = "/home/meera/catalog.json"  # optional
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use craftsense_core::validation::validate_share_rate_bps;
use craftsense_core::{Money, ShareRate, ValidationError, DEFAULT_ARTISAN_SHARE_BPS};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "CRAFTSENSE_";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted cart, registrations and forum.
    pub data_dir: PathBuf,

    /// Artisan share of a product price in basis points.
    /// e.g., 9000 = 90%
    pub artisan_share_bps: u32,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Catalog JSON to use instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub artisan_share_bps: Option<u32>,
    pub currency_symbol: Option<String>,
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Data: platform data directory (`.craftsense` if none can be found)
    /// - Artisan share: 90%
    /// - Currency: ₹
    /// - Catalog: bundled
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            artisan_share_bps: DEFAULT_ARTISAN_SHARE_BPS,
            currency_symbol: "₹".to_string(),
            catalog_path: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "craftsense", "craftsense")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".craftsense"))
}

impl AppConfig {
    /// Platform location of `config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from all sources.
    ///
    /// An explicitly given `config_path` must exist; the default location
    /// is optional.
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, overrides, |name| std::env::var(name).ok())
    }

    /// [`AppConfig::load`] with an injectable environment lookup.
    pub fn load_with_env(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(env);
        config.apply_overrides(overrides);
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `CRAFTSENSE_*` environment overrides.
    ///
    /// Unparseable numbers are logged and ignored.
    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| env(&format!("{}{}", ENV_PREFIX, name));

        if let Some(dir) = var("DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(bps) = var("ARTISAN_SHARE_BPS") {
            match bps.trim().parse::<u32>() {
                Ok(bps) => self.artisan_share_bps = bps,
                Err(_) => warn!(value = %bps, "Ignoring non-numeric CRAFTSENSE_ARTISAN_SHARE_BPS"),
            }
        }

        if let Some(symbol) = var("CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = var("CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref dir) = overrides.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(bps) = overrides.artisan_share_bps {
            self.artisan_share_bps = bps;
        }
        if let Some(ref symbol) = overrides.currency_symbol {
            self.currency_symbol = symbol.clone();
        }
        if let Some(ref path) = overrides.catalog_path {
            self.catalog_path = Some(path.clone());
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_share_rate_bps(self.artisan_share_bps)?;

        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".into()));
        }

        if self.currency_symbol.chars().count() > 8 {
            return Err(ConfigError::Invalid(
                "currency_symbol must be at most 8 characters".into(),
            ));
        }

        Ok(())
    }

    pub fn share_rate(&self) -> ShareRate {
        ShareRate::from_bps(self.artisan_share_bps)
    }

    /// Formats a whole-unit amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::new(1500)), "₹1500");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let units = amount.units();
        format!(
            "{}{}{}",
            if units < 0 { "-" } else { "" },
            self.currency_symbol,
            units.unsigned_abs()
        )
    }
}
