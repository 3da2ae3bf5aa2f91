// src/repository/memory.rs
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{ProductListing, ProductRepository, RepositoryError, RepositoryResult};
use crate::models::product::{NewProduct, Product};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Product store kept in process memory. Ids start at 1 and are never reused,
/// like a `BIGSERIAL` column.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> RepositoryResult<ProductListing> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(ProductListing {
            products: table.rows.values().cloned().collect(),
            skipped: Vec::new(),
        })
    }

    async fn get(&self, id: i64) -> RepositoryResult<Product> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, product: &NewProduct) -> RepositoryResult<i64> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, product.clone().into_product(id));
        Ok(id)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> RepositoryResult<u64> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name.clone_from(&product.name);
                row.price = product.price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }
}
