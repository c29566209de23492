//! Product Repository

use serde_json::Value;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Product;

const PRODUCTS_TABLE: &str = "products";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self.base.db().select(PRODUCTS_TABLE).await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(id.clone()).await?;
        Ok(product)
    }

    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCTS_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Merge the given fields into an existing product (the whole request
    /// body plus a fresh `updatedAt`, mirroring a document-store `$set`).
    pub async fn merge(&self, id: &RecordId, fields: Value) -> RepoResult<Product> {
        let updated: Option<Product> = self.base.db().update(id.clone()).merge(fields).await?;
        updated.ok_or_else(|| RepoError::NotFound("Product not found".to_string()))
    }

    pub async fn delete(&self, id: &RecordId) -> RepoResult<()> {
        let deleted: Option<Product> = self.base.db().delete(id.clone()).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}
