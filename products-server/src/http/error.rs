//! API error types with IntoResponse
//!
//! Errors are converted to responses with appropriate status codes. Error
//! bodies are wrapped in a top-level `detail` field. The two not-found
//! variants deliberately produce different bodies: existing clients depend
//! on both shapes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Hints returned with a product lookup miss
pub const NOT_FOUND_SUGGESTIONS: [&str; 3] = [
    "Double-check the product ID and try again.",
    "Ensure the product exists in the database.",
    "Contact support for further assistance.",
];

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path parameter or request body (422)
    Validation {
        location: &'static str,
        message: String,
    },

    /// GET of a missing product (404, structured body)
    ProductNotFound { product_id: i64 },

    /// PUT to a missing product (404, plain string detail)
    UpdateTargetMissing,

    /// Insert or commit failed, transaction rolled back (500, structured body)
    CreateFailed(DbError),

    /// Existence check, update or commit failed (500, structured body)
    UpdateFailed(DbError),

    /// Read failed (500, logged, no JSON body)
    Store(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { location, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": [{
                        "loc": [location],
                        "msg": message,
                        "type": "value_error",
                    }]
                })),
            )
                .into_response(),
            Self::ProductNotFound { product_id } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "detail": {
                        "error": "Product not found",
                        "product_id": product_id,
                        "message": "The requested product could not be found.",
                        "suggestions": NOT_FOUND_SUGGESTIONS,
                    }
                })),
            )
                .into_response(),
            Self::UpdateTargetMissing => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Product not found" })),
            )
                .into_response(),
            Self::CreateFailed(e) => {
                tracing::error!(error = %e, "create product failed");
                write_failure(
                    "Failed to create product",
                    "An error occurred while creating the product.",
                    &e,
                )
            }
            Self::UpdateFailed(e) => {
                tracing::error!(error = %e, "update product failed");
                write_failure(
                    "Failed to update product",
                    "An error occurred while updating the product.",
                    &e,
                )
            }
            Self::Store(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

// The underlying error text is passed through to the caller verbatim.
fn write_failure(error: &str, message: &str, cause: &DbError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "detail": {
                "error": error,
                "message": message,
                "detail": cause.to_string(),
            }
        })),
    )
        .into_response()
}
