//! # CraftSense CLI Entry Point
//!
//! ```text
//! $ craftsense products --category Pottery
//! $ craftsense cart add p1 --quantity 2
//! $ craftsense workshops register 1
//! $ craftsense forum post "Natural dyes" "Turmeric or indigo?"
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    craftsense_cli::run(std::env::args_os())
}
