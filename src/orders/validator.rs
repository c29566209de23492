//! Order validation
//!
//! Runs before any store access; a failure here never touches the
//! database.

use crate::db::models::{OrderCreate, OrderStatus};
use crate::utils::AppError;

/// Validate an order creation payload: `customerInfo` present, `items`
/// a non-empty sequence, `grandTotal` a positive number. Item contents
/// are deliberately not inspected.
pub fn validate_create(payload: &OrderCreate) -> Result<(), AppError> {
    if payload.customer_info.is_none() {
        return Err(AppError::validation(
            "Missing required fields: customerInfo and items are required",
        ));
    }

    match &payload.items {
        None => {
            return Err(AppError::validation(
                "Missing required fields: customerInfo and items are required",
            ));
        }
        Some(items) if items.is_empty() => {
            return Err(AppError::validation(
                "Missing required fields: customerInfo and items are required",
            ));
        }
        Some(_) => {}
    }

    match payload.grand_total {
        Some(total) if total > 0.0 => Ok(()),
        _ => Err(AppError::validation("Invalid grand total")),
    }
}

/// Parse and validate a requested target status. Unknown or missing
/// status is rejected before any store lookup.
pub fn validate_status(status: Option<&str>) -> Result<OrderStatus, AppError> {
    status
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            AppError::validation(
                "Invalid status. Must be one of: pending, confirmed, shipped, delivered, cancelled, returned",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::CustomerInfo;
    use serde_json::{Map, json};

    fn valid_payload() -> OrderCreate {
        OrderCreate {
            order_number: Some(json!("ORD-7")),
            customer_info: Some(CustomerInfo {
                phone: Some("555-0100".to_string()),
                extra: Map::new(),
            }),
            items: Some(vec![json!({"sku": "A1"})]),
            grand_total: Some(99.5),
            extra: Map::new(),
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(validate_create(&valid_payload()).is_ok());
    }

    #[test]
    fn rejects_missing_customer_info() {
        let mut payload = valid_payload();
        payload.customer_info = None;
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn rejects_missing_or_empty_items() {
        let mut payload = valid_payload();
        payload.items = None;
        assert!(validate_create(&payload).is_err());

        let mut payload = valid_payload();
        payload.items = Some(vec![]);
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn rejects_non_positive_grand_total() {
        for total in [None, Some(0.0), Some(-5.0)] {
            let mut payload = valid_payload();
            payload.grand_total = total;
            assert!(validate_create(&payload).is_err(), "total {total:?}");
        }
    }

    #[test]
    fn parses_every_enumerated_status() {
        for status in OrderStatus::ALL {
            assert_eq!(validate_status(Some(status.as_str())).unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_or_missing_status() {
        assert!(validate_status(Some("bogus")).is_err());
        assert!(validate_status(Some("PENDING")).is_err());
        assert!(validate_status(None).is_err());
    }
}
