//! Liveness endpoints

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// GET / - plain liveness banner
async fn root() -> &'static str {
    "AllMart Server is Running"
}

/// GET /health - basic health check
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
