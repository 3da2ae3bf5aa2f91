// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::{NewProduct, Product};

/// Body of `POST /products` and `PUT /products/{id}`. Unknown fields,
/// including any client-sent `id`, are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ignores_client_supplied_id() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"id": 42, "name": "Cheese", "price": 7.5}"#).unwrap();
        let new_product = NewProduct::from(req);
        assert_eq!(new_product, NewProduct { name: "Cheese".into(), price: 7.5 });
    }

    #[test]
    fn request_requires_name_and_price() {
        assert!(serde_json::from_str::<ProductRequest>(r#"{"name": "Cheese"}"#).is_err());
        assert!(serde_json::from_str::<ProductRequest>(r#"{"price": 1}"#).is_err());
        assert!(serde_json::from_str::<ProductRequest>(r#"{"name": 5, "price": 1}"#).is_err());
    }

    #[test]
    fn request_accepts_empty_name_and_zero_price() {
        let req: ProductRequest = serde_json::from_str(r#"{"name": "", "price": 0}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.price, 0.0);
    }

    #[test]
    fn response_serializes_id_name_price() {
        let body = serde_json::to_value(ProductResponse::from(Product {
            id: 3,
            name: "Butter".into(),
            price: 4.25,
        }))
        .unwrap();
        assert_eq!(body, serde_json::json!({"id": 3, "name": "Butter", "price": 4.25}));
    }
}
