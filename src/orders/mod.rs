//! Order lifecycle domain
//!
//! - [`validator`] - required-field and status checks, run before any
//!   store access
//! - [`lifecycle`] - the transition patch builder: turns a requested
//!   status into the exact field-level update to apply

pub mod lifecycle;
pub mod validator;

pub use crate::db::models::OrderStatus;
pub use lifecycle::TransitionPatch;
