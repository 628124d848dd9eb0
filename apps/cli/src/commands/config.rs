//! # Config Command
//!
//! Shows the effective configuration after every source has been applied.

use serde::Serialize;
use tracing::debug;

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(flatten)]
    pub config: AppConfig,
    pub artisan_share_percent: f64,
}

pub fn show(state: &AppState) -> AppResult<ConfigResponse> {
    debug!("config command");
    Ok(ConfigResponse {
        config: state.config.clone(),
        artisan_share_percent: state.config.share_rate().percentage(),
    })
}

impl Render for ConfigResponse {
    fn render(&self, _config: &AppConfig) -> String {
        let c = &self.config;
        format!(
            "data_dir          = {}\nartisan_share_bps = {} ({}%)\ncurrency_symbol   = {}\ncatalog_path      = {}",
            c.data_dir.display(),
            c.artisan_share_bps,
            self.artisan_share_percent,
            c.currency_symbol,
            c.catalog_path
                .as_ref()
                .map_or_else(|| "(bundled)".to_string(), |p| p.display().to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftsense_core::Catalog;
    use craftsense_storage::MemoryStore;

    #[test]
    fn test_show() {
        let state = AppState::with_storage(AppConfig::default(), Catalog::default(), MemoryStore::new());
        let response = show(&state).unwrap();

        assert_eq!(response.artisan_share_percent, 90.0);
        assert!(response.render(&state.config).contains("(bundled)"));
    }
}
