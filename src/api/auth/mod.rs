//! Session cookie clearing
//!
//! The only auth-adjacent behavior the server has: `GET /logout` expires
//! the `token` cookie. No session state is held server-side.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/logout", get(handler::logout))
}
