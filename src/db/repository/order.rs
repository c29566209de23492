//! Order Repository
//!
//! Persistence boundary for order documents: insert, filtered find,
//! find-by-id, patch-by-id, delete-by-id, and the statistics
//! aggregation. Transition patches are applied as a single UPDATE with
//! store-level last-write-wins semantics; there is deliberately no
//! version check (see DESIGN.md).

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderStats};
use crate::orders::TransitionPatch;

const ORDERS_TABLE: &str = "orders";

/// Optional equality filters for order listing, AND-composed.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub customer_phone: Option<String>,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order document.
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDERS_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(id.clone()).await?;
        Ok(order)
    }

    /// Find orders matching the filter, most recent `createdAt` first.
    /// The descending ordering is part of the API contract.
    pub async fn find(&self, filter: OrderFilter) -> RepoResult<Vec<Order>> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.status.is_some() {
            conditions.push("status = $status");
        }
        if filter.customer_phone.is_some() {
            conditions.push("customerInfo.phone = $phone");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let sql = format!("SELECT * FROM orders{where_clause} ORDER BY createdAt DESC");

        let mut query = self.base.db().query(&sql);
        if let Some(status) = filter.status {
            query = query.bind(("status", status));
        }
        if let Some(phone) = filter.customer_phone {
            query = query.bind(("phone", phone));
        }

        let orders: Vec<Order> = query.await?.take(0)?;
        Ok(orders)
    }

    /// Apply a transition patch as one UPDATE. Only fields present in the
    /// patch appear in the SET clause, so untouched lifecycle timestamps
    /// are never cleared.
    pub async fn apply_patch(&self, id: &RecordId, patch: TransitionPatch) -> RepoResult<Order> {
        let mut set_parts = vec!["status = $status", "updatedAt = $updated_at"];
        if patch.shipped_at.is_some() {
            set_parts.push("shippedAt = $shipped_at");
        }
        if patch.delivered_at.is_some() {
            set_parts.push("deliveredAt = $delivered_at");
        }
        if patch.returned_at.is_some() {
            set_parts.push("returnedAt = $returned_at");
        }
        if patch.cancelled_at.is_some() {
            set_parts.push("cancelledAt = $cancelled_at");
        }
        if patch.tracking_number.is_some() {
            set_parts.push("trackingNumber = $tracking_number");
        }
        if patch.return_reason.is_some() {
            set_parts.push("returnReason = $return_reason");
        }

        let sql = format!("UPDATE $rec SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(&sql)
            .bind(("rec", id.clone()))
            .bind(("status", patch.status))
            .bind(("updated_at", patch.updated_at));
        if let Some(v) = patch.shipped_at {
            query = query.bind(("shipped_at", v));
        }
        if let Some(v) = patch.delivered_at {
            query = query.bind(("delivered_at", v));
        }
        if let Some(v) = patch.returned_at {
            query = query.bind(("returned_at", v));
        }
        if let Some(v) = patch.cancelled_at {
            query = query.bind(("cancelled_at", v));
        }
        if let Some(v) = patch.tracking_number {
            query = query.bind(("tracking_number", v));
        }
        if let Some(v) = patch.return_reason {
            query = query.bind(("return_reason", v));
        }

        let orders: Vec<Order> = query.await?.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))
    }

    /// Hard delete. There is no soft-delete or tombstone.
    pub async fn delete(&self, id: &RecordId) -> RepoResult<()> {
        let deleted: Option<Order> = self.base.db().delete(id.clone()).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound("Order not found".to_string()));
        }
        Ok(())
    }

    /// Compute aggregate statistics in a single logical read pass.
    ///
    /// `$all` is selected once and every count derives from it, so the
    /// result is internally consistent for that pass (concurrent writes
    /// may or may not be reflected).
    pub async fn stats(&self) -> RepoResult<OrderStats> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $all = SELECT status, grandTotal FROM orders;
                LET $delivered = SELECT * FROM $all WHERE status = 'delivered';

                RETURN {
                    totalOrders: count($all),
                    pendingOrders: count(SELECT * FROM $all WHERE status = 'pending'),
                    confirmedOrders: count(SELECT * FROM $all WHERE status = 'confirmed'),
                    shippedOrders: count(SELECT * FROM $all WHERE status = 'shipped'),
                    deliveredOrders: count($delivered),
                    cancelledOrders: count(SELECT * FROM $all WHERE status = 'cancelled'),
                    returnedOrders: count(SELECT * FROM $all WHERE status = 'returned'),
                    totalRevenue: math::sum($delivered.grandTotal) OR 0
                }
            "#,
            )
            .await?;

        let stats: Option<OrderStats> = result.take(2)?;
        Ok(stats.unwrap_or_default())
    }
}
