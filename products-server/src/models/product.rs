//! Product entity and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product record as stored and as returned to clients.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Body of create and update requests.
///
/// All three fields are required; update overwrites all of them together.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductPayload {
    /// Attach a store-assigned id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_all_fields() {
        let err = serde_json::from_str::<ProductPayload>(r#"{"name": "Widget", "price": 9.99}"#)
            .unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn payload_rejects_string_price() {
        let result = serde_json::from_str::<ProductPayload>(
            r#"{"name": "Widget", "price": "cheap", "description": "A widget"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn payload_accepts_integer_price_and_ignores_extra_fields() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"id": 99, "name": "Widget", "price": 10, "description": "A widget"}"#,
        )
        .unwrap();
        assert_eq!(payload.price, 10.0);

        let product = payload.into_product(7);
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn product_serializes_all_four_fields() {
        let product = Product {
            id: 1,
            name: "Widget".into(),
            price: 9.99,
            description: "A widget".into(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "price": 9.99,
                "description": "A widget"
            })
        );
    }
}
