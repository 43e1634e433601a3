//! Vino Crackers CLI - Browse the catalog and manage a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List sparklers
//! vc-cli products --category sparklers
//!
//! # Add three packets of product 3, then take one away
//! vc-cli add 3 --quantity 3
//! vc-cli remove 3
//!
//! # Show the cart
//! vc-cli summary
//!
//! # Send an enquiry for everything in the cart
//! vc-cli enquire --name "Arun" --phone "98400 12345"
//! ```
//!
//! # Environment Variables
//!
//! - `VC_CART_FILE` - Cart file (default: `vinoCrackersCart.json`)
//! - `VC_CATALOG_PATH` - JSON product list replacing the built-in catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vino_crackers_core::{CategoryFilter, ProductId};

mod commands;
mod store;

use commands::CliError;

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(author, version, about = "Vino Crackers cart tools")]
struct Cli {
    /// Cart file
    #[arg(long, global = true, env = "VC_CART_FILE", default_value = "vinoCrackersCart.json")]
    cart_file: PathBuf,

    /// JSON product list replacing the built-in catalog
    #[arg(long, global = true, env = "VC_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Category slug (`sparklers`, `flower-pots`, `ground-chakkars`, `rockets`, `gift-boxes` or `all`)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Take a product out of the cart
    Remove {
        /// Product ID
        id: ProductId,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change a product's quantity by a signed delta
    Adjust {
        /// Product ID
        id: ProductId,

        /// Change in quantity, e.g. 2 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Show the cart
    Summary {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Empty the cart
    Clear,
    /// Send an enquiry for the cart
    Enquire {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Phone number to call back
        #[arg(short, long)]
        phone: String,

        /// Anything else we should know
        #[arg(short, long, default_value = "")]
        message: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vino_crackers_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;
    let cart_file = cli.cart_file.as_path();

    match cli.command {
        Commands::Products { category, json } => {
            let filter = category
                .as_deref()
                .map_or(CategoryFilter::All, CategoryFilter::parse_or_all);
            commands::products::list(&catalog, filter, json)?;
        }
        Commands::Add { id, quantity } => {
            commands::cart::adjust(&catalog, cart_file, id, i64::from(quantity))?;
        }
        Commands::Remove { id, quantity } => {
            commands::cart::adjust(&catalog, cart_file, id, -i64::from(quantity))?;
        }
        Commands::Adjust { id, delta } => {
            commands::cart::adjust(&catalog, cart_file, id, delta)?;
        }
        Commands::Summary { json } => commands::cart::summary(&catalog, cart_file, json)?,
        Commands::Clear => commands::cart::clear(cart_file)?,
        Commands::Enquire {
            name,
            phone,
            message,
        } => commands::enquiry::enquire(&catalog, cart_file, &name, &phone, &message)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_adjust_accepts_negative_delta() {
        let cli = Cli::try_parse_from(["vc-cli", "adjust", "3", "-2"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Commands::Adjust { id, delta: -2 } if id == ProductId::new(3)
        ));
    }

    #[test]
    fn test_global_cart_file_after_subcommand() {
        let cli = Cli::try_parse_from(["vc-cli", "summary", "--cart-file", "/tmp/cart.json"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.cart_file, PathBuf::from("/tmp/cart.json"));
    }
}
