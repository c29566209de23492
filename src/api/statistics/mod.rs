//! Order statistics
//!
//! One aggregate snapshot endpoint, computed store-side in a single query.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/orders-stats", get(handler::order_stats))
}
