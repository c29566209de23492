//! Banner Repository

use serde_json::Value;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Banner;

const BANNERS_TABLE: &str = "banners";

#[derive(Clone)]
pub struct BannerRepository {
    base: BaseRepository,
}

impl BannerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Banner>> {
        let banners: Vec<Banner> = self.base.db().select(BANNERS_TABLE).await?;
        Ok(banners)
    }

    pub async fn create(&self, banner: Banner) -> RepoResult<Banner> {
        let created: Option<Banner> = self
            .base
            .db()
            .create(BANNERS_TABLE)
            .content(banner)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create banner".to_string()))
    }

    /// Merge the supplied subset of fields into an existing banner.
    pub async fn merge(&self, id: &RecordId, fields: Value) -> RepoResult<Banner> {
        let updated: Option<Banner> = self.base.db().update(id.clone()).merge(fields).await?;
        updated.ok_or_else(|| RepoError::NotFound("Banner not found".to_string()))
    }
}
