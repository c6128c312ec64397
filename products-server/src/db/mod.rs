//! Database layer - connection pool and product stores
//!
//! # Design Principles
//!
//! - Connection pool, one checkout per statement or transaction - no shared cursor
//! - Parameterized statements only
//! - Writes wrapped in explicit begin/commit/rollback
//! - Reads run outside transactions

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::PgProductStore;
pub use store::{DbError, ProductStore};
