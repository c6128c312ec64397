//! Domain models
//!
//! Field validation is delegated to request-body typing: a payload that
//! deserializes is a valid product.

pub mod product;

pub use product::{Product, ProductPayload};
