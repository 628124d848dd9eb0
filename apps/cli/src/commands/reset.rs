//! # Reset Command
//!
//! Deletes the saved cart, workshop registrations and forum board. The next
//! command starts from an empty cart, no registrations and the seed threads.

use serde::Serialize;
use tracing::{debug, info};

use craftsense_storage::{KeyValueStore, CART_KEY, FORUM_KEY, WORKSHOP_KEY};

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState};

/// Storage keys removed by `reset`, in order.
pub const RESET_KEYS: [&str; 3] = [CART_KEY, WORKSHOP_KEY, FORUM_KEY];

#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub cleared: Vec<String>,
}

pub fn reset(state: &AppState) -> AppResult<ResetResponse> {
    debug!("reset command");

    for key in RESET_KEYS {
        state.storage().remove(key)?;
    }
    info!(keys = ?RESET_KEYS, "Local data cleared");

    Ok(ResetResponse {
        cleared: RESET_KEYS.iter().map(|k| k.to_string()).collect(),
    })
}

impl Render for ResetResponse {
    fn render(&self, _config: &AppConfig) -> String {
        format!("Cleared {}", self.cleared.join(", "))
    }
}
