//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::db::repository::{OrderFilter, OrderRepository, parse_record_key};
use crate::orders::{TransitionPatch, validator};
use crate::utils::{AppError, AppResult};
use crate::utils::time::now_millis;

const ORDERS_TABLE: &str = "orders";

/// Field names the server derives itself; stripped from the free-form
/// remainder of a creation payload so they cannot be smuggled in.
const RESERVED_ORDER_FIELDS: &[&str] = &[
    "id",
    "status",
    "createdAt",
    "updatedAt",
    "shippedAt",
    "deliveredAt",
    "returnedAt",
    "cancelledAt",
    "trackingNumber",
    "returnReason",
];

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub customer_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateBody {
    pub status: Option<String>,
    pub tracking_number: Option<String>,
    pub return_reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub message: String,
    pub result: Order,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /orders - create a new order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<CreateOrderResponse>)> {
    validator::validate_create(&payload)?;

    let now = now_millis();
    let OrderCreate {
        order_number,
        customer_info,
        items,
        grand_total,
        mut extra,
    } = payload;
    for field in RESERVED_ORDER_FIELDS {
        extra.remove(*field);
    }

    // validate_create guarantees the three required fields are present
    let order = Order {
        id: None,
        order_number: order_number.clone(),
        customer_info: customer_info.unwrap_or_default(),
        items: items.unwrap_or_default(),
        grand_total: grand_total.unwrap_or_default(),
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
        shipped_at: None,
        delivered_at: None,
        returned_at: None,
        cancelled_at: None,
        tracking_number: None,
        return_reason: None,
        extra,
    };

    let repo = OrderRepository::new(state.db.clone());
    let created = repo.create(order).await?;

    let order_id = created.id.map(|id| id.to_string()).unwrap_or_default();
    tracing::info!(order_id = %order_id, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id,
            order_number,
        }),
    ))
}

/// GET /orders?status=&customerPhone= - list orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find(OrderFilter {
            status: query.status,
            customer_phone: query.customer_phone,
        })
        .await?;
    Ok(Json(orders))
}

/// GET /orders/:id - fetch a single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let record_id = parse_record_key(ORDERS_TABLE, &id)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&record_id)
        .await?
        .ok_or_else(|| AppError::not_found("Order"))?;
    Ok(Json(order))
}

/// GET /orders/customer/:phone - orders for one customer, newest first
pub async fn list_by_customer(
    State(state): State<ServerState>,
    Path(phone): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find(OrderFilter {
            status: None,
            customer_phone: Some(phone),
        })
        .await?;
    Ok(Json(orders))
}

/// PATCH /orders/:id - transition an order to a new status
///
/// Id format and status value are both rejected before any store access;
/// the patch itself is one UPDATE.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdateBody>,
) -> AppResult<Json<TransitionResponse>> {
    let record_id = parse_record_key(ORDERS_TABLE, &id)?;
    let status = validator::validate_status(body.status.as_deref())?;

    let patch = TransitionPatch::build(
        status,
        body.tracking_number,
        body.return_reason,
        now_millis(),
    );

    let repo = OrderRepository::new(state.db.clone());
    let updated = repo.apply_patch(&record_id, patch).await?;

    tracing::info!(order_id = %id, status = %status, "Order status updated");

    Ok(Json(TransitionResponse {
        message: format!("Order status updated to {status} successfully"),
        result: updated,
    }))
}

/// DELETE /orders/:id - remove an order irrevocably
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let record_id = parse_record_key(ORDERS_TABLE, &id)?;

    let repo = OrderRepository::new(state.db.clone());
    repo.delete(&record_id).await?;

    Ok(Json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}
