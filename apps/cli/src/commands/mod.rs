//! # Commands Module
//!
//! Every subcommand the `craftsense` binary exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Render trait, exports)
//! ├── cart.rs      ◄─── cart show/add/remove/set/clear
//! ├── workshop.rs  ◄─── workshops list/register/unregister/mine
//! ├── catalog.rs   ◄─── products, artisans, resources
//! ├── forum.rs     ◄─── forum list/post/comment/like
//! ├── reset.rs     ◄─── delete saved local data
//! └── config.rs    ◄─── effective configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ craftsense cart add p1 --quantity 2                                  │
//! │         │                                                               │
//! │         │ (clap parses into Command::Cart(CartCommand::Add { .. }))     │
//! │         ▼                                                               │
//! │  commands::cart::add(&state, "p1", 2)                                   │
//! │      -> AppResult<CartUpdate>          ◄── plain data, Serialize        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  --json?  yes: serde_json::to_string_pretty(&response)                  │
//! │           no:  response.render(&config)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command functions never print. They return response types so tests can
//! assert on data instead of scraping output.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod forum;
pub mod reset;
pub mod workshop;

use crate::state::AppConfig;

/// Human-readable rendering of a command response.
pub trait Render {
    fn render(&self, config: &AppConfig) -> String;
}
