//! User API Module
//!
//! Users are addressed by email. `PUT /user` is the login-time upsert the
//! storefront calls on every sign-in; `PATCH /users/{email}` is the admin
//! role assignment.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list))
        .route(
            "/users/{email}",
            get(handler::get_by_email).patch(handler::update_role),
        )
        .route("/user", put(handler::upsert))
}
