//! Emporium CLI - catalog tooling.
//!
//! # Usage
//!
//! ```bash
//! # Check a catalog document before pointing STOREFRONT_CATALOG_PATH at it
//! emporium-cli catalog validate data/products.json
//!
//! # List the built-in catalog
//! emporium-cli catalog list
//!
//! # List a catalog document
//! emporium-cli catalog list data/products.json
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "emporium-cli")]
#[command(author, version, about = "Emporium storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect catalog documents
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Parse and validate a catalog document
    Validate {
        /// Path to the JSON catalog
        path: PathBuf,
    },
    /// Print every record of a catalog
    List {
        /// Path to the JSON catalog (default: the built-in catalog)
        path: Option<PathBuf>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Validate { path } => {
                commands::catalog::validate(&path)?;
            }
            CatalogAction::List { path } => commands::catalog::list(path.as_deref())?,
        },
    }
    Ok(())
}
