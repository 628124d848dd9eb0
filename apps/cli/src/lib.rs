//! # CraftSense CLI Library
//!
//! Core library for the `craftsense` command-line application.
//! `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! craftsense_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState: config + catalog + storage
//! │   └── config.rs   ◄─── AppConfig loading and validation
//! ├── commands/
//! │   ├── mod.rs      ◄─── Render trait
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── workshop.rs ◄─── Workshop registration
//! │   ├── catalog.rs  ◄─── Products, artisans, resources
//! │   ├── forum.rs    ◄─── Community board
//! │   ├── reset.rs    ◄─── Delete saved local data
//! │   └── config.rs   ◄─── Effective configuration
//! └── error.rs        ◄─── AppError and exit codes
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CartCommand, Cli, Command, ForumCommand, WorkshopCommand};
use commands::Render;
use error::{AppError, AppResult};
use state::{AppConfig, AppState};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • --help / --version / usage errors exit here                       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info,craftsense=debug; override with RUST_LOG           │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → config.toml → CRAFTSENSE_* → flags                     │
/// │                                                                         │
/// │  4. Open State ───────────────────────────────────────────────────────► │
/// │     • Catalog (bundled or --catalog)                                    │
/// │     • FileStore under data_dir                                          │
/// │                                                                         │
/// │  5. Dispatch Command ─────────────────────────────────────────────────► │
/// │     • Response to stdout (text or --json)                               │
/// │     • AppError to stderr, exit status per error code                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    init_tracing();

    let json = cli.global.json;
    match execute(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                match serde_json::to_string_pretty(&err) {
                    Ok(body) => eprintln!("{}", body),
                    Err(_) => eprintln!("error {}", err),
                }
            } else {
                eprintln!("error {}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=warn` - Only swallowed persistence failures and worse
/// - `RUST_LOG=craftsense_storage=trace` - Everything from storage
/// - Default: `info,craftsense=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,craftsense=debug"));

    // A second init (e.g. in tests) is harmless, so the error is ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads config and state, runs the command, and renders its response.
pub fn execute(cli: Cli) -> AppResult<String> {
    let config = AppConfig::load(cli.global.config.as_deref(), &cli.global.overrides())?;
    debug!(?config, "Configuration loaded");

    let state = AppState::open(config)?;
    info!(command = ?cli.command, "Running command");

    dispatch(&state, cli.command, cli.global.json)
}

/// Runs one command against already-open state.
pub fn dispatch(state: &AppState, command: Command, json: bool) -> AppResult<String> {
    let out = Output {
        config: &state.config,
        json,
    };

    match command {
        Command::Cart(cmd) => match cmd {
            CartCommand::Show => out.emit(&commands::cart::show(state)?),
            CartCommand::Add {
                product_id,
                quantity,
            } => out.emit(&commands::cart::add(state, &product_id, quantity)?),
            CartCommand::Remove { product_id } => {
                out.emit(&commands::cart::remove(state, &product_id)?)
            }
            CartCommand::Set {
                product_id,
                quantity,
            } => out.emit(&commands::cart::set_quantity(state, &product_id, quantity)?),
            CartCommand::Clear => out.emit(&commands::cart::clear(state)?),
        },

        Command::Workshops(cmd) => match cmd {
            WorkshopCommand::List { category } => {
                out.emit(&commands::workshop::list(state, category)?)
            }
            WorkshopCommand::Register { workshop_id } => {
                out.emit(&commands::workshop::register(state, &workshop_id)?)
            }
            WorkshopCommand::Unregister { workshop_id } => {
                out.emit(&commands::workshop::unregister(state, &workshop_id)?)
            }
            WorkshopCommand::Mine => out.emit(&commands::workshop::mine(state)?),
        },

        Command::Products { query, category } => out.emit(&commands::catalog::products(
            state,
            &query,
            category.as_deref(),
        )?),
        Command::Artisans { query, craft } => {
            out.emit(&commands::catalog::artisans(state, &query, craft.as_deref())?)
        }
        Command::Resources { query, category } => {
            out.emit(&commands::catalog::resources(state, &query, category)?)
        }

        Command::Forum(cmd) => match cmd {
            ForumCommand::List => out.emit(&commands::forum::list(state)?),
            ForumCommand::Post {
                title,
                content,
                image,
            } => out.emit(&commands::forum::post(state, &title, &content, image.as_deref())?),
            ForumCommand::Comment { post_id, content } => {
                out.emit(&commands::forum::comment(state, &post_id, &content)?)
            }
            ForumCommand::Like { post_id } => out.emit(&commands::forum::like(state, &post_id)?),
        },

        Command::Config => out.emit(&commands::config::show(state)?),
        Command::Reset => out.emit(&commands::reset::reset(state)?),
    }
}

struct Output<'a> {
    config: &'a AppConfig,
    json: bool,
}

impl Output<'_> {
    fn emit<T: Serialize + Render>(&self, response: &T) -> AppResult<String> {
        if self.json {
            serde_json::to_string_pretty(response)
                .map_err(|e| AppError::internal(format!("Failed to encode response: {}", e)))
        } else {
            Ok(response.render(self.config))
        }
    }
}
