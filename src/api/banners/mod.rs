//! Banner API Module
//!
//! Promotional banners: list, upload and partial update. PATCH and PUT
//! on a banner are deliberately identical.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/banners", get(handler::list).post(handler::create))
        .route("/banners/{id}", patch(handler::update).put(handler::update))
}
