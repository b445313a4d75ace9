//! Green And Blue CLI - Catalog seeding and export tools.
//!
//! # Usage
//!
//! ```bash
//! # Insert the six default products when the collection is empty
//! gb-cli seed
//!
//! # Export the remote catalog to a JSON file
//! gb-cli export
//! gb-cli export --output respaldo.json
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the remote collection with the default products
//! - `export` - Dump the remote catalog as pretty-printed JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gb-cli")]
#[command(author, version, about = "Green And Blue CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the remote collection with the default products when it is empty
    Seed,
    /// Export the remote catalog as pretty-printed JSON
    Export {
        /// Output file path
        #[arg(short, long, default_value = "productos_green_blue.json")]
        output: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::Export { output } => commands::export::run(&output).await?,
    }
    Ok(())
}
