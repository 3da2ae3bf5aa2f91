// src/extractors.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;

pub const INVALID_ID: &str = "Invalid product id";
pub const INVALID_BODY: &str = "Invalid product data";

/// The `{id}` path segment, parsed as a base-10 non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.parse::<i64>() {
            Ok(id) if id >= 0 => Some(ProductId(id)),
            _ => None,
        }
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "missing product id");
                AppError::validation(INVALID_ID)
            })?;

        ProductId::parse(&raw).ok_or_else(|| {
            warn!(id = %raw, "rejected product id");
            AppError::validation(INVALID_ID)
        })
    }
}

/// JSON request body. Unlike `axum::Json` it ignores `Content-Type` and turns
/// every decode failure, syntax or shape, into a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            AppError::validation(INVALID_BODY)
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            warn!(error = %e, "rejected request body");
            AppError::validation(INVALID_BODY)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_ids() {
        assert_eq!(ProductId::parse("0"), Some(ProductId(0)));
        assert_eq!(ProductId::parse("42"), Some(ProductId(42)));
    }

    #[test]
    fn rejects_non_numeric_negative_and_overflowing_ids() {
        assert_eq!(ProductId::parse("abc"), None);
        assert_eq!(ProductId::parse("-1"), None);
        assert_eq!(ProductId::parse("1.5"), None);
        assert_eq!(ProductId::parse(""), None);
        assert_eq!(ProductId::parse("99999999999999999999"), None);
    }
}
