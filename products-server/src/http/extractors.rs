//! Custom Axum extractors
//!
//! Every rejection, whether a non-integer id, a truncated or empty body, a
//! missing content type or a mistyped field, becomes a 422 validation error.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body, parsed regardless of `content-type`
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation {
                location: "body",
                message: e.body_text(),
            })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|e| ApiError::Validation {
            location: "body",
            message: e.body_text(),
        })?;

        Ok(Self(value))
    }
}

/// Typed path parameters
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation {
                location: "path",
                message: e.body_text(),
            })?;

        Ok(Self(value))
    }
}
