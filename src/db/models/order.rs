//! Order Model
//!
//! An order is one customer purchase. Line items and most of the
//! customer contact block are opaque to the server: they are stored and
//! echoed back untouched. The server only interprets `status`,
//! `grandTotal`, `customerInfo.phone`, and the lifecycle timestamps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use surrealdb::RecordId;

use super::serde_helpers;

// =============================================================================
// Order status
// =============================================================================

/// Order lifecycle status.
///
/// `pending` is set at creation; `confirmed -> shipped -> delivered` is
/// the success path; `cancelled` and `returned` are reachable from any
/// state. No predecessor check is enforced anywhere: any order may be
/// set to any valid status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "returned" => Ok(OrderStatus::Returned),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order documents
// =============================================================================

/// Customer contact block. Only `phone` is interpreted (customer-scoped
/// lookup); everything else passes through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stored order document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Caller-supplied human-facing identifier, opaque, echoed on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<Value>,
    pub customer_info: CustomerInfo,
    /// Non-empty sequence of opaque line items
    pub items: Vec<Value>,
    /// Authoritative order value, used in revenue aggregation
    pub grand_total: f64,
    pub status: OrderStatus,
    pub created_at: i64,
    pub updated_at: i64,
    // Lifecycle timestamps: set exactly when the corresponding transition
    // occurs, never cleared by a later one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
    /// Free-form fields supplied at creation, stored untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order creation payload. Required fields are optional here so the
/// validator can report what is missing instead of failing to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub order_number: Option<Value>,
    #[serde(default)]
    pub customer_info: Option<CustomerInfo>,
    #[serde(default)]
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub grand_total: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregate order statistics.
///
/// `total_orders` counts every stored order, including any whose status
/// is outside the enumeration; `total_revenue` sums `grandTotal` over
/// delivered orders and is `0` when none exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub confirmed_orders: i64,
    pub shipped_orders: i64,
    pub delivered_orders: i64,
    pub cancelled_orders: i64,
    pub returned_orders: i64,
    pub total_revenue: f64,
}
