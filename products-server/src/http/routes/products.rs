//! Product endpoints
//!
//! Request bodies are typed as `ProductPayload` and ids as `i64`; the
//! extractors reject anything that does not parse with 422 before a handler
//! runs.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath};
use crate::http::server::AppState;
use crate::models::{Product, ProductPayload};

pub const UPDATED_MESSAGE: &str = "Product updated successfully";

/// Create product response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub product_id: i64,
}

/// Update product response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /products - all products, store order
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await.map_err(ApiError::Store)?;
    Ok(Json(products))
}

/// GET /products/{product_id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidPath(product_id): ValidPath<i64>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .get(product_id)
        .await
        .map_err(ApiError::Store)?
        .map(Json)
        .ok_or(ApiError::ProductNotFound { product_id })
}

/// POST /products - insert, no existence check
async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<ProductPayload>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let product_id = state
        .store
        .create(&payload)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(product_id, "product created");
    Ok(Json(CreatedResponse { product_id }))
}

/// PUT /products/{product_id} - full replacement of an existing product
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidPath(product_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<ProductPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let exists = state
        .store
        .exists(product_id)
        .await
        .map_err(ApiError::UpdateFailed)?;
    if !exists {
        return Err(ApiError::UpdateTargetMissing);
    }

    state
        .store
        .update(product_id, &payload)
        .await
        .map_err(ApiError::UpdateFailed)?;

    tracing::info!(product_id, "product updated");
    Ok(Json(MessageResponse {
        message: UPDATED_MESSAGE.to_owned(),
    }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{product_id}", get(get_product).put(update_product))
}
