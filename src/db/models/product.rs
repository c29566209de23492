//! Product Model
//!
//! Catalog entity. Only `name`, `price` and `category` are validated;
//! the rest of the document (`description`, `details`, `productTag`,
//! `colors`, `features`, ...) is free-form and carried in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use surrealdb::RecordId;

use super::serde_helpers;

/// Stored product document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Free-form catalog fields, stored and searched but not validated
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Product creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
