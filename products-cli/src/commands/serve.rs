//! HTTP server command
//!
//! Connects to the products database and serves the product API until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use products_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, PgProductStore};
use products_server::http::{run_server, ServerConfig};
use products_server::DbConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PRODUCTS_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Maximum database connections in the pool
    #[arg(
        long,
        env = "PRODUCTS_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env().context("Invalid database configuration")?;

    tracing::info!(database = %db_config.describe(), "Connecting to database");

    // A database that cannot be reached at startup is fatal
    let pool = create_pool_with_options(&db_config, args.max_connections)
        .await
        .with_context(|| format!("Failed to connect to database {}", db_config.describe()))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting products server on {}", args.bind);

    run_server(Arc::new(PgProductStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
