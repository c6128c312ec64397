//! Product store trait and database error type

use async_trait::async_trait;
use sqlx::error::ErrorKind;

use crate::models::{Product, ProductPayload};

/// Database error type
///
/// The `Display` text of every variant is what write failures report back
/// to the client as the underlying error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Unique, not-null, check or foreign-key violation.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The store could not be reached (pool timeout, closed pool, I/O, TLS).
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::Constraint(db.message().to_owned()),
                _ => Self::Sqlx(e),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(e.to_string()),
            _ => Self::Sqlx(e),
        }
    }
}

/// Persistence seam for products (testable)
///
/// Implementations own id generation. `create` and `update` are atomic:
/// either the whole write is committed or nothing is.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in store-native order.
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError>;

    /// Dedicated existence check used before updates.
    async fn exists(&self, id: i64) -> Result<bool, DbError>;

    /// Insert a product and return the id the store assigned.
    async fn create(&self, payload: &ProductPayload) -> Result<i64, DbError>;

    /// Overwrite name, price and description of an existing product.
    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<(), DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Unavailable(_)));
        assert!(err.to_string().starts_with("database unavailable: "));
    }

    #[test]
    fn io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(matches!(err, DbError::Unavailable(_)));
    }

    #[test]
    fn row_not_found_falls_through() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }
}
