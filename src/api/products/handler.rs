//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate};
use crate::db::repository::{ProductRepository, parse_record_key};
use crate::utils::{AppError, AppResult};
use crate::utils::time::now_millis;

const PRODUCTS_TABLE: &str = "products";

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
    pub message: String,
    pub result: Product,
}

/// GET /products - full catalog listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /products/search?q= - case-insensitive substring search
///
/// Matches across name, category and the free-form text fields. The
/// catalog is small enough to scan in memory; no index is maintained.
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let q = query
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::validation("Search query is required"))?;

    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    let matches: Vec<Product> = products
        .into_iter()
        .filter(|p| matches_query(p, q))
        .collect();
    Ok(Json(matches))
}

/// GET /products/:id - fetch a single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let record_id = parse_record_key(PRODUCTS_TABLE, &id)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&record_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product"))?;
    Ok(Json(product))
}

/// POST /products - create a new product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<CreateProductResponse>)> {
    let ProductCreate {
        name,
        price,
        category,
        mut extra,
    } = payload;

    let name = name.filter(|n| !n.is_empty());
    let category = category.filter(|c| !c.is_empty());
    let price = price.filter(|p| *p != 0.0);
    let (Some(name), Some(price), Some(category)) = (name, price, category) else {
        return Err(AppError::validation(
            "Missing required fields: name, price, category",
        ));
    };

    for field in ["id", "createdAt", "updatedAt"] {
        extra.remove(field);
    }

    let now = now_millis();
    let product = Product {
        id: None,
        name,
        price,
        category,
        created_at: Some(now),
        updated_at: Some(now),
        extra,
    };

    let repo = ProductRepository::new(state.db.clone());
    let created = repo.create(product).await?;
    let product_id = created.id.map(|id| id.to_string()).unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product created successfully".to_string(),
            product_id,
        }),
    ))
}

/// PUT /products/:id - merge the request body into an existing product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(mut body): Json<Map<String, Value>>,
) -> AppResult<Json<UpdateProductResponse>> {
    let record_id = parse_record_key(PRODUCTS_TABLE, &id)?;

    body.remove("id");
    body.insert("updatedAt".to_string(), json!(now_millis()));

    let repo = ProductRepository::new(state.db.clone());
    let updated = repo.merge(&record_id, Value::Object(body)).await?;

    Ok(Json(UpdateProductResponse {
        message: "Product updated successfully".to_string(),
        result: updated,
    }))
}

/// DELETE /products/:id - remove a product from the catalog
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let record_id = parse_record_key(PRODUCTS_TABLE, &id)?;

    let repo = ProductRepository::new(state.db.clone());
    repo.delete(&record_id).await?;

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

/// True when the needle appears (case-insensitively) in the value: a
/// plain string matches on substring, an array matches if any element
/// does. Numbers and objects never match.
fn text_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items.iter().any(|v| text_matches(v, needle)),
        _ => false,
    }
}

fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();

    if product.name.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
    {
        return true;
    }

    for field in ["description", "details", "productTag", "features"] {
        if product
            .extra
            .get(field)
            .is_some_and(|v| text_matches(v, &needle))
        {
            return true;
        }
    }

    // colors is a list of { name, ... } swatch objects
    product
        .extra
        .get("colors")
        .and_then(Value::as_array)
        .is_some_and(|colors| {
            colors
                .iter()
                .any(|c| c.get("name").is_some_and(|n| text_matches(n, &needle)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, extra: Value) -> Product {
        let extra = match extra {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Product {
            id: None,
            name: name.to_string(),
            price: 10.0,
            category: category.to_string(),
            created_at: None,
            updated_at: None,
            extra,
        }
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let p = product("Walnut Desk", "furniture", json!({}));
        assert!(matches_query(&p, "walnut"));
        assert!(matches_query(&p, "DESK"));
        assert!(!matches_query(&p, "chair"));
    }

    #[test]
    fn search_matches_free_form_text_fields() {
        let p = product(
            "Desk",
            "furniture",
            json!({
                "description": "Solid oak writing desk",
                "productTag": "bestseller",
                "features": ["cable tray", "Adjustable Height"],
            }),
        );
        assert!(matches_query(&p, "oak"));
        assert!(matches_query(&p, "bestseller"));
        assert!(matches_query(&p, "adjustable"));
    }

    #[test]
    fn search_matches_color_swatch_names() {
        let p = product(
            "Desk",
            "furniture",
            json!({ "colors": [{ "name": "Midnight Blue", "hex": "#191970" }] }),
        );
        assert!(matches_query(&p, "midnight"));
        // only the swatch name is searchable, not the hex code
        assert!(!matches_query(&p, "#191970"));
    }

    #[test]
    fn search_ignores_non_text_fields() {
        let p = product("Desk", "furniture", json!({ "stock": 42, "details": 7 }));
        assert!(!matches_query(&p, "42"));
        assert!(!matches_query(&p, "7"));
    }
}
