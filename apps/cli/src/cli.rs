//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use craftsense_core::{ResourceCategory, WorkshopCategory};

use crate::state::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "craftsense", version, about = "CraftSense artisan marketplace")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "CRAFTSENSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for the persisted cart, registrations and forum
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Catalog JSON to use instead of the bundled one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Artisan share of the price in basis points (9000 = 90%)
    #[arg(long, global = true)]
    pub share_bps: Option<u32>,

    /// Currency symbol for display
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            artisan_share_bps: self.share_bps,
            currency_symbol: self.currency.clone(),
            catalog_path: self.catalog.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shopping cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Workshop portal
    #[command(subcommand)]
    Workshops(WorkshopCommand),

    /// Browse marketplace products
    Products {
        /// Search name and description
        #[arg(default_value = "")]
        query: String,

        /// Only this category ("All" for every category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Browse the artisan directory
    Artisans {
        /// Search name, story, location and specialties
        #[arg(default_value = "")]
        query: String,

        /// Only this craft ("All" for every craft)
        #[arg(long)]
        craft: Option<String>,
    },

    /// Browse the resource library
    Resources {
        /// Search title and description
        #[arg(default_value = "")]
        query: String,

        /// Craft, Digital, Business or Government
        #[arg(long)]
        category: Option<ResourceCategory>,
    },

    /// Community forum
    #[command(subcommand)]
    Forum(ForumCommand),

    /// Show the effective configuration
    Config,

    /// Delete the saved cart, registrations and forum board
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals
    Show,

    /// Add a product (adding again increases the quantity)
    Add {
        product_id: String,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove a product
    Remove { product_id: String },

    /// Set a product's quantity (0 or less removes it)
    Set {
        product_id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Empty the cart
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum WorkshopCommand {
    /// List workshops
    List {
        /// Craft, Business, Sustainability or "Digital Skills"
        #[arg(long)]
        category: Option<WorkshopCategory>,
    },

    /// Register for a workshop
    Register { workshop_id: String },

    /// Cancel a registration
    Unregister { workshop_id: String },

    /// Workshops you are registered for
    Mine,
}

#[derive(Debug, Subcommand)]
pub enum ForumCommand {
    /// List threads, newest first
    List,

    /// Start a thread
    Post {
        title: String,
        content: String,

        /// Image link
        #[arg(long)]
        image: Option<String>,
    },

    /// Reply to a thread
    Comment { post_id: String, content: String },

    /// Like a thread
    Like { post_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from(["craftsense", "cart", "add", "p1", "-q", "3", "--json"]).unwrap();
        assert!(cli.global.json);
        match cli.command {
            Command::Cart(CartCommand::Add { product_id, quantity }) => {
                assert_eq!(product_id, "p1");
                assert_eq!(quantity, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_quantity() {
        let cli = Cli::try_parse_from(["craftsense", "cart", "set", "p1", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cart(CartCommand::Set { quantity: -2, .. })
        ));
    }

    #[test]
    fn test_parse_categories() {
        let cli = Cli::try_parse_from(["craftsense", "workshops", "list", "--category", "digital-skills"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Workshops(WorkshopCommand::List {
                category: Some(WorkshopCategory::DigitalSkills)
            })
        ));

        assert!(Cli::try_parse_from(["craftsense", "resources", "--category", "Cooking"]).is_err());
    }

    #[test]
    fn test_parse_reset() {
        let cli = Cli::try_parse_from(["craftsense", "reset", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Reset));
        assert!(cli.global.json);
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "craftsense",
            "products",
            "--data-dir",
            "/tmp/cs",
            "--share-bps",
            "8000",
        ])
        .unwrap();

        let overrides = cli.global.overrides();
        assert_eq!(overrides.data_dir, Some(PathBuf::from("/tmp/cs")));
        assert_eq!(overrides.artisan_share_bps, Some(8000));
        assert!(overrides.currency_symbol.is_none());
    }
}
