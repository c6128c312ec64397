//! Repository implementations backed by Postgres

pub mod products;

pub use products::PgProductStore;
