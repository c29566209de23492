//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and handler result
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - timestamp helpers

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResult};
