use std::path::PathBuf;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - the process-scoped resource handle shared by every
/// handler.
///
/// Holds the configuration and the embedded database connection. `Clone`
/// is shallow; the same `Surreal<Db>` handle is shared across requests,
/// which is the only cross-request state the server has. Documents are
/// never cached in-process: every operation round-trips to the store.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Build state around an already-initialized database handle.
    ///
    /// Tests use this with an in-memory engine.
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state: ensure the work directory exists and
    /// open the embedded database under it.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create work directory {}: {e}",
                work_dir.display()
            ))
        })?;

        let db_path = work_dir.join("database");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::with_db(config.clone(), db_service.db))
    }
}
