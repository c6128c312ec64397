//! products CLI - runs the product catalogue HTTP service
//!
//! Database connection settings come from `DB_HOST`, `DB_PORT`, `DB_NAME`,
//! `DB_USER` and `DB_PASSWORD`, optionally loaded from a `.env` file.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "products",
    author,
    version,
    about = "HTTP CRUD service for the products table"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; variables may come from the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
    }

    Ok(())
}
