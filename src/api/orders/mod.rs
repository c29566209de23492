//! Order API Module
//!
//! Creation, querying, status transitions and deletion of orders. All
//! mutations validate before touching the store.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", post(handler::create).get(handler::list))
        .route("/orders/customer/{phone}", get(handler::list_by_customer))
        .route(
            "/orders/{id}",
            get(handler::get_by_id)
                .patch(handler::update_status)
                .delete(handler::remove),
        )
}
