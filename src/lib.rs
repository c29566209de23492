//! AllMart Storefront Server
//!
//! Backend for a small e-commerce storefront. Exposes CRUD and query
//! endpoints over four collections (orders, products, users, banners)
//! stored in an embedded SurrealDB instance.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, server bootstrap
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer (models + repositories)
//! ├── orders/        # Order lifecycle: validation and transition patches
//! └── utils/         # Errors, logging, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::orders::{OrderStatus, TransitionPatch};
pub use crate::utils::{AppError, AppResult};
pub use crate::utils::logger::init_logger;

/// Load `.env` (if present) and initialize the tracing subscriber.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}
