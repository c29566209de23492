//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::core::ServerState;
use crate::db::models::{User, UserRolePatch, UserUpsert};
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::time::now_millis;

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub result: User,
}

/// GET /users - list all users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.db.clone());
    let users = repo.find_all().await?;
    Ok(Json(users))
}

/// GET /users/:email - fetch one user, `null` when absent
pub async fn get_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<Option<User>>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&email).await?;
    Ok(Json(user))
}

/// PATCH /users/:email - assign role fields to an existing user
///
/// A patch that changes nothing is rejected so the admin UI can tell a
/// no-op apart from a successful promotion.
pub async fn update_role(
    State(state): State<ServerState>,
    Path(email): Path<String>,
    Json(patch): Json<UserRolePatch>,
) -> AppResult<Json<UpdateUserResponse>> {
    let repo = UserRepository::new(state.db.clone());

    let before = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    let mut fields = Map::new();
    if let Some(role) = patch.role {
        fields.insert("role".to_string(), json!(role));
    }
    if let Some(user_email) = patch.user_email {
        fields.insert("userEmail".to_string(), json!(user_email));
    }
    if let Some(user_name) = patch.user_name {
        fields.insert("userName".to_string(), json!(user_name));
    }

    let after = repo.merge_by_email(&email, Value::Object(fields)).await?;

    let unchanged = serde_json::to_value(&before)
        .and_then(|b| serde_json::to_value(&after).map(|a| b == a))
        .map_err(|e| AppError::internal(format!("Failed to compare user documents: {e}")))?;
    if unchanged {
        return Err(AppError::validation("No changes made to the user"));
    }

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        result: after,
    }))
}

/// PUT /user - login-time upsert keyed by `{email, displayName}`
///
/// An existing user is returned unchanged, except that a payload carrying
/// `status == "Requested"` records the pending seller request. A new user
/// is stored with the whole payload plus `name` and a creation timestamp.
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<UserUpsert>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.db.clone());

    let email = payload.email.clone().unwrap_or_default();
    let name = payload.display_name.clone().unwrap_or_default();

    if let Some(existing) = repo.find_by_email_and_name(&email, &name).await? {
        if payload.status.as_deref() == Some("Requested") {
            let updated = repo.set_status(&email, &name, "Requested").await?;
            return Ok(Json(updated));
        }
        return Ok(Json(existing));
    }

    let mut document = payload.extra;
    document.remove("id");
    if let Some(email) = payload.email {
        document.insert("email".to_string(), json!(email));
    }
    if let Some(display_name) = payload.display_name {
        document.insert("displayName".to_string(), json!(display_name.clone()));
        document.insert("name".to_string(), json!(display_name));
    }
    if let Some(status) = payload.status {
        document.insert("status".to_string(), json!(status));
    }
    document.insert("timestamp".to_string(), json!(now_millis()));

    let created = repo.create(Value::Object(document)).await?;
    Ok(Json(created))
}
