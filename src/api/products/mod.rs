//! Product API Module
//!
//! Catalog CRUD plus free-text search. The static `/products/search`
//! route is registered before the `/products/{id}` capture so the word
//! "search" is never treated as an id.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/products/search", get(handler::search))
        .route("/products", post(handler::create).get(handler::list))
        .route(
            "/products/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::remove),
        )
}
