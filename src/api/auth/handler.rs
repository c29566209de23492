//! Auth API Handlers

use axum::{Json, extract::State};
use http::{HeaderMap, HeaderValue, header};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /logout - expire the `token` session cookie
///
/// Cross-site frontends need `SameSite=None; Secure` in production; in
/// development the cookie stays `SameSite=Strict` so plain HTTP works.
pub async fn logout(State(state): State<ServerState>) -> AppResult<(HeaderMap, Json<Value>)> {
    let cookie = if state.config.is_production() {
        "token=; Max-Age=0; Path=/; Secure; SameSite=None"
    } else {
        "token=; Max-Age=0; Path=/; SameSite=Strict"
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(cookie)
            .map_err(|e| AppError::internal(format!("Failed to clear cookie: {e}")))?,
    );

    Ok((headers, Json(json!({ "success": true }))))
}
