//! User Repository
//!
//! Users are addressed by their `email` field rather than by record id,
//! so most operations are field-filtered queries.

use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;

const USERS_TABLE: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self.base.db().select(USERS_TABLE).await?;
        Ok(users)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM users WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn find_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> RepoResult<Option<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM users WHERE email = $email AND name = $name")
            .bind(("email", email.to_string()))
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(users.into_iter().next())
    }

    /// Merge `fields` into the user matching `email`, returning the
    /// updated document or NotFound when no user matches.
    pub async fn merge_by_email(&self, email: &str, fields: Value) -> RepoResult<User> {
        let users: Vec<User> = self
            .base
            .db()
            .query("UPDATE users MERGE $data WHERE email = $email RETURN AFTER")
            .bind(("email", email.to_string()))
            .bind(("data", fields))
            .await?
            .take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("User not found".to_string()))
    }

    /// Set only `status` on the user matching `{email, name}`.
    pub async fn set_status(&self, email: &str, name: &str, status: &str) -> RepoResult<User> {
        let users: Vec<User> = self
            .base
            .db()
            .query("UPDATE users SET status = $status WHERE email = $email AND name = $name RETURN AFTER")
            .bind(("status", status.to_string()))
            .bind(("email", email.to_string()))
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("User not found".to_string()))
    }

    /// Insert a new user document as given.
    pub async fn create(&self, document: Value) -> RepoResult<User> {
        let created: Option<User> = self
            .base
            .db()
            .create(USERS_TABLE)
            .content(document)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
