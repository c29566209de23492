//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness endpoints
//! - [`auth`] - session cookie clearing
//! - [`orders`] - order lifecycle endpoints
//! - [`statistics`] - aggregate order statistics
//! - [`products`] - catalog CRUD and search
//! - [`users`] - user profiles and upsert
//! - [`banners`] - promotional banner CRUD

pub mod auth;
pub mod banners;
pub mod health;
pub mod orders;
pub mod products;
pub mod statistics;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
