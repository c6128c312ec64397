//! Product repository over Postgres
//!
//! - list/get/exists: single statements on the pool, no transaction
//! - create/update: one statement inside begin/commit, rolled back on failure
//!
//! Columns are cast on the way out (`id::int8`, `price::float8`) so the
//! table may use serial or bigserial ids and numeric or float prices.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::db::store::{DbError, ProductStore};
use crate::models::{Product, ProductPayload};

const LIST_SQL: &str = r#"
    SELECT id::int8 AS id, name, price::float8 AS price, description
    FROM products
"#;

const GET_SQL: &str = r#"
    SELECT id::int8 AS id, name, price::float8 AS price, description
    FROM products
    WHERE id = $1
"#;

const EXISTS_SQL: &str = "SELECT id FROM products WHERE id = $1";

const INSERT_SQL: &str = r#"
    INSERT INTO products (name, price, description)
    VALUES ($1, $2, $3)
    RETURNING id::int8
"#;

const UPDATE_SQL: &str = r#"
    UPDATE products
    SET name = $1, price = $2, description = $3
    WHERE id = $4
"#;

/// Product store backed by a connection pool
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Roll back, keeping the statement error as the one reported.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "rollback failed");
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, Product>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        let row = sqlx::query_as::<_, Product>(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let row = sqlx::query(EXISTS_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create(&self, payload: &ProductPayload) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(INSERT_SQL)
            .bind(&payload.name)
            .bind(payload.price)
            .bind(&payload.description)
            .fetch_one(&mut *tx)
            .await;

        let id = match inserted {
            Ok(id) => id,
            Err(e) => {
                rollback(tx).await;
                return Err(e.into());
            }
        };

        tx.commit().await?;
        tracing::debug!(product_id = id, "product inserted");
        Ok(id)
    }

    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(UPDATE_SQL)
            .bind(&payload.name)
            .bind(payload.price)
            .bind(&payload.description)
            .bind(id)
            .execute(&mut *tx)
            .await;

        if let Err(e) = updated {
            rollback(tx).await;
            return Err(e.into());
        }

        tx.commit().await?;
        tracing::debug!(product_id = id, "product updated");
        Ok(())
    }
}
