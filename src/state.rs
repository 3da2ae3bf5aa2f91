// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::{InMemoryProductRepository, PgProductRepository, ProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub fn postgres(db_pool: PgPool) -> Self {
        Self::new(Arc::new(PgProductRepository::new(db_pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }
}
