//! products-server: HTTP CRUD over the `products` table
//!
//! Layers:
//! - models: product entity and request payload
//! - db: connection pool, store trait, Postgres and in-memory stores
//! - http: router, handlers, error mapping, server loop
//! - config: database connection settings from the environment

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{create_pool, DbError, MemoryStore, PgProductStore, ProductStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Product, ProductPayload};
