//! Banner Model
//!
//! Promotional record: `url`, `heading`, `description` plus a creation
//! timestamp. Unlike products, nothing else is stored.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Stored banner document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub url: String,
    pub heading: String,
    pub description: String,
    pub timestamp: i64,
}

/// Banner creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct BannerCreate {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial banner update: any subset of the three fields
#[derive(Debug, Clone, Deserialize)]
pub struct BannerUpdate {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BannerUpdate {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.heading.is_none() && self.description.is_none()
    }
}
