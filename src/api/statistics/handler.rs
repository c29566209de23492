//! Statistics API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::OrderStats;
use crate::db::repository::OrderRepository;
use crate::utils::AppResult;

/// GET /orders-stats - per-status order counts plus delivered revenue
pub async fn order_stats(State(state): State<ServerState>) -> AppResult<Json<OrderStats>> {
    let repo = OrderRepository::new(state.db.clone());
    let stats = repo.stats().await?;
    Ok(Json(stats))
}
