// src/repository/mod.rs
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("product {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to decode product row {index}: {source}")]
    RowDecode {
        index: usize,
        #[source]
        source: sqlx::Error,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result of a full table scan.
///
/// Rows that could not be decoded do not abort the scan; they are reported in
/// `skipped` so the caller can decide whether a partial listing is acceptable.
#[derive(Debug, Default)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub skipped: Vec<RepositoryError>,
}

impl ProductListing {
    /// Decode every row with `decode`, keeping the good ones and recording
    /// the rest.
    pub fn from_rows<R, F>(rows: impl IntoIterator<Item = R>, mut decode: F) -> Self
    where
        F: FnMut(&R) -> Result<Product, sqlx::Error>,
    {
        let mut listing = Self::default();
        for (index, row) in rows.into_iter().enumerate() {
            match decode(&row) {
                Ok(product) => listing.products.push(product),
                Err(source) => listing
                    .skipped
                    .push(RepositoryError::RowDecode { index, source }),
            }
        }
        listing
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Persistence operations for products. Every method is a single round trip
/// to the backing store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<ProductListing>;

    async fn get(&self, id: i64) -> RepositoryResult<Product>;

    /// Returns the store-assigned id.
    async fn create(&self, product: &NewProduct) -> RepositoryResult<i64>;

    /// Returns the number of rows affected; zero when `id` does not exist.
    async fn update(&self, id: i64, product: &NewProduct) -> RepositoryResult<u64>;

    /// Returns the number of rows affected; zero when `id` does not exist.
    async fn delete(&self, id: i64) -> RepositoryResult<u64>;
}
