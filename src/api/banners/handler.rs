//! Banner API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::core::ServerState;
use crate::db::models::{Banner, BannerCreate, BannerUpdate};
use crate::db::repository::{BannerRepository, parse_record_key};
use crate::utils::{AppError, AppResult};
use crate::utils::time::now_millis;

const BANNERS_TABLE: &str = "banners";

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub result: Banner,
}

/// GET /banners - list all banners
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Banner>>> {
    let repo = BannerRepository::new(state.db.clone());
    let banners = repo.find_all().await?;
    Ok(Json(banners))
}

/// POST /banners - upload a new banner
///
/// Only the three declared fields are stored; anything else in the body
/// is dropped.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BannerCreate>,
) -> AppResult<(StatusCode, Json<BannerResponse>)> {
    let url = payload.url.filter(|v| !v.is_empty());
    let heading = payload.heading.filter(|v| !v.is_empty());
    let description = payload.description.filter(|v| !v.is_empty());
    let (Some(url), Some(heading), Some(description)) = (url, heading, description) else {
        return Err(AppError::validation("Invalid banner data"));
    };

    let banner = Banner {
        id: None,
        url,
        heading,
        description,
        timestamp: now_millis(),
    };

    let repo = BannerRepository::new(state.db.clone());
    let created = repo.create(banner).await?;

    Ok((
        StatusCode::CREATED,
        Json(BannerResponse {
            message: "Banner uploaded successfully".to_string(),
            result: created,
        }),
    ))
}

/// PATCH|PUT /banners/:id - update any subset of url, heading, description
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BannerUpdate>,
) -> AppResult<Json<BannerResponse>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields provided for update"));
    }

    let record_id = parse_record_key(BANNERS_TABLE, &id)?;

    let mut fields = Map::new();
    if let Some(url) = payload.url.filter(|v| !v.is_empty()) {
        fields.insert("url".to_string(), json!(url));
    }
    if let Some(heading) = payload.heading.filter(|v| !v.is_empty()) {
        fields.insert("heading".to_string(), json!(heading));
    }
    if let Some(description) = payload.description.filter(|v| !v.is_empty()) {
        fields.insert("description".to_string(), json!(description));
    }

    let repo = BannerRepository::new(state.db.clone());
    let updated = repo.merge(&record_id, Value::Object(fields)).await?;

    Ok(Json(BannerResponse {
        message: "Banner updated successfully".to_string(),
        result: updated,
    }))
}
