//! In-memory product store for testing
//!
//! Mirrors the Postgres store's observable behavior: sequential ids starting
//! at 1, no uniqueness checks, whole-row overwrites on update. A switch
//! simulates the database going away so the 500 paths can be exercised.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{DbError, ProductStore};
use crate::models::{Product, ProductPayload};

#[derive(Default)]
struct Rows {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// Mock product store
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Rows>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `DbError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        self.check_available()?;
        let rows = self.rows.lock().await;
        Ok(rows.products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        self.check_available()?;
        Ok(self.rows.lock().await.products.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, DbError> {
        self.check_available()?;
        Ok(self.rows.lock().await.products.contains_key(&id))
    }

    async fn create(&self, payload: &ProductPayload) -> Result<i64, DbError> {
        self.check_available()?;
        let mut rows = self.rows.lock().await;
        rows.last_id += 1;
        let id = rows.last_id;
        rows.products.insert(id, payload.clone().into_product(id));
        Ok(id)
    }

    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<(), DbError> {
        self.check_available()?;
        let mut rows = self.rows.lock().await;
        // Matches UPDATE ... WHERE id = $1: a missing row is not an error here.
        if let Some(product) = rows.products.get_mut(&id) {
            *product = payload.clone().into_product(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> ProductPayload {
        ProductPayload {
            name: name.into(),
            price: 1.5,
            description: format!("{} description", name),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        assert_eq!(store.create(&payload("a")).await.unwrap(), 1);
        assert_eq!(store.create(&payload("b")).await.unwrap(), 2);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_payloads_create_distinct_rows() {
        let store = MemoryStore::new();
        let first = store.create(&payload("same")).await.unwrap();
        let second = store.create(&payload("same")).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn update_of_missing_row_changes_nothing() {
        let store = MemoryStore::new();
        store.update(42, &payload("ghost")).await.unwrap();
        assert!(!store.exists(42).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::new();
        store.create(&payload("a")).await.unwrap();
        store.set_unavailable(true);

        assert!(matches!(store.list().await, Err(DbError::Unavailable(_))));
        assert!(matches!(store.get(1).await, Err(DbError::Unavailable(_))));
        assert!(matches!(store.create(&payload("b")).await, Err(DbError::Unavailable(_))));

        store.set_unavailable(false);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
