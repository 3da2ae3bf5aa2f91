// src/repository/postgres.rs
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{ProductListing, ProductRepository, RepositoryError, RepositoryResult};
use crate::models::product::{NewProduct, Product};

// NUMERIC does not decode into f64, so every read casts the column.
const SELECT_ALL: &str = "SELECT id, name, price::FLOAT8 AS price FROM products";
const SELECT_ONE: &str = "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1";
const INSERT: &str = "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE products SET name = $1, price = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM products WHERE id = $1";

/// Product store backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> RepositoryResult<ProductListing> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        Ok(ProductListing::from_rows(rows, |row| Product::from_row(row)))
    }

    async fn get(&self, id: i64) -> RepositoryResult<Product> {
        sqlx::query_as::<_, Product>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, product: &NewProduct) -> RepositoryResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(INSERT)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> RepositoryResult<u64> {
        let result = sqlx::query(UPDATE)
            .bind(&product.name)
            .bind(product.price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
