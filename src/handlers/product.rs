// src/handlers/product.rs
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::dtos::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::extractors::{JsonBody, ProductId};
use crate::models::product::NewProduct;
use crate::state::AppState;

pub const CREATED: &str = "Product created successfully";
pub const UPDATED: &str = "Product updated successfully";
pub const DELETED: &str = "Product deleted successfully";

// GET /products - List all products
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let listing = state
        .products
        .list()
        .await
        .map_err(|e| AppError::db("Failed to fetch products", e))?;

    for err in &listing.skipped {
        warn!(error = %err, "Skipping undecodable product row");
    }

    Ok(Json(
        listing
            .products
            .into_iter()
            .map(ProductResponse::from)
            .collect(),
    ))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .products
        .get(id)
        .await
        .map_err(|e| AppError::from_repository("Failed to fetch product", e))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<(StatusCode, &'static str), AppError> {
    let id = state
        .products
        .create(&NewProduct::from(payload))
        .await
        .map_err(|e| AppError::db("Failed to create product", e))?;

    info!(id, "Product created");
    Ok((StatusCode::CREATED, CREATED))
}

// PUT /products/{id} - Overwrite product
//
// A missing id is still reported as success; only the log records it.
#[instrument(skip(state, payload))]
pub async fn update_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<&'static str, AppError> {
    let affected = state
        .products
        .update(id, &NewProduct::from(payload))
        .await
        .map_err(|e| AppError::db("Failed to update product", e))?;

    if affected == 0 {
        warn!(id, "Update matched no product");
    }

    Ok(UPDATED)
}

// DELETE /products/{id} - Delete product
//
// Deleting a missing id is reported as success, so repeated deletes never fail.
#[instrument(skip(state))]
pub async fn delete_product(
    ProductId(id): ProductId,
    State(state): State<AppState>,
) -> Result<&'static str, AppError> {
    let affected = state
        .products
        .delete(id)
        .await
        .map_err(|e| AppError::db("Failed to delete product", e))?;

    if affected == 0 {
        warn!(id, "Delete matched no product");
    }

    Ok(DELETED)
}
