//! Repository Module
//!
//! CRUD and aggregation over the SurrealDB collections. Repositories are
//! thin: one store call per operation, no retries, no caching.

pub mod banner;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use banner::BannerRepository;
pub use order::{OrderFilter, OrderRepository};
pub use product::ProductRepository;
pub use user::UserRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Validate a path id as a syntactically well-formed record key and turn
/// it into a `RecordId` for `table`.
///
/// Accepts either a bare key or the full `"table:key"` form. Keys are
/// restricted to ASCII alphanumerics and `_` (the shape of generated
/// record keys), so a malformed id is rejected here with a validation
/// error before any store access.
pub fn parse_record_key(table: &str, id: &str) -> Result<RecordId, AppError> {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::validation(format!("Invalid {table} ID")));
    }

    Ok(RecordId::from_table_key(table, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_prefixed_keys() {
        let rid = parse_record_key("orders", "x8b2k1q9z0m4n7p3t6w5").unwrap();
        assert_eq!(rid.to_string(), "orders:x8b2k1q9z0m4n7p3t6w5");

        let rid = parse_record_key("orders", "orders:abc123").unwrap();
        assert_eq!(rid.to_string(), "orders:abc123");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(parse_record_key("orders", "not-an-id").is_err());
        assert!(parse_record_key("orders", "").is_err());
        assert!(parse_record_key("orders", "orders:").is_err());
        assert!(parse_record_key("orders", "a b").is_err());
        assert!(parse_record_key("orders", "⟨weird⟩").is_err());
    }

    #[test]
    fn malformed_key_maps_to_validation_error() {
        match parse_record_key("products", "not-an-id") {
            Err(AppError::Validation(_)) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
