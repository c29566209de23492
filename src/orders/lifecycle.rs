//! Order transition patches
//!
//! A transition is a request to set an order's status. Each target
//! status adds a fixed set of fields on top of the base patch
//! `{status, updatedAt}`:
//!
//! | Target | Additional fields |
//! |--------|-------------------|
//! | shipped | `shippedAt`, `trackingNumber` if supplied |
//! | delivered | `deliveredAt` |
//! | returned | `returnedAt`, `returnReason` if supplied |
//! | cancelled | `cancelledAt` |
//! | pending, confirmed | none |
//!
//! No predecessor state is checked: any order may be moved to any valid
//! status, and repeating a transition overwrites its timestamp. This
//! permissiveness is intentional (see DESIGN.md), not a missing guard.

use crate::db::models::OrderStatus;

/// The explicit field-assignment set for one transition. Fields that are
/// `None` are left out of the store update entirely, so timestamps from
/// earlier transitions are never cleared.
#[derive(Debug, Clone)]
pub struct TransitionPatch {
    pub status: OrderStatus,
    pub updated_at: i64,
    pub shipped_at: Option<i64>,
    pub delivered_at: Option<i64>,
    pub returned_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub tracking_number: Option<String>,
    pub return_reason: Option<String>,
}

impl TransitionPatch {
    /// Build the patch for a transition to `status` at time `now`.
    ///
    /// `tracking_number` only takes effect on `shipped`, `return_reason`
    /// only on `returned`; both are otherwise ignored. A return without
    /// a reason still stamps `returnedAt`.
    pub fn build(
        status: OrderStatus,
        tracking_number: Option<String>,
        return_reason: Option<String>,
        now: i64,
    ) -> Self {
        let mut patch = Self {
            status,
            updated_at: now,
            shipped_at: None,
            delivered_at: None,
            returned_at: None,
            cancelled_at: None,
            tracking_number: None,
            return_reason: None,
        };

        match status {
            OrderStatus::Shipped => {
                patch.shipped_at = Some(now);
                patch.tracking_number = tracking_number;
            }
            OrderStatus::Delivered => {
                patch.delivered_at = Some(now);
            }
            OrderStatus::Returned => {
                patch.returned_at = Some(now);
                patch.return_reason = return_reason;
            }
            OrderStatus::Cancelled => {
                patch.cancelled_at = Some(now);
            }
            OrderStatus::Pending | OrderStatus::Confirmed => {}
        }

        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamps(patch: &TransitionPatch) -> [Option<i64>; 4] {
        [
            patch.shipped_at,
            patch.delivered_at,
            patch.returned_at,
            patch.cancelled_at,
        ]
    }

    #[test]
    fn shipped_stamps_shipped_at_and_carries_tracking_number() {
        let patch = TransitionPatch::build(
            OrderStatus::Shipped,
            Some("TRACK-1".to_string()),
            None,
            42,
        );

        assert_eq!(patch.updated_at, 42);
        assert_eq!(patch.shipped_at, Some(42));
        assert_eq!(patch.tracking_number.as_deref(), Some("TRACK-1"));
        assert_eq!(patch.delivered_at, None);
        assert_eq!(patch.returned_at, None);
        assert_eq!(patch.cancelled_at, None);
    }

    #[test]
    fn shipped_without_tracking_number_still_transitions() {
        let patch = TransitionPatch::build(OrderStatus::Shipped, None, None, 42);
        assert_eq!(patch.shipped_at, Some(42));
        assert_eq!(patch.tracking_number, None);
    }

    #[test]
    fn returned_without_reason_still_stamps_returned_at() {
        let patch = TransitionPatch::build(OrderStatus::Returned, None, None, 7);
        assert_eq!(patch.returned_at, Some(7));
        assert_eq!(patch.return_reason, None);
    }

    #[test]
    fn returned_with_reason_carries_it() {
        let patch = TransitionPatch::build(
            OrderStatus::Returned,
            None,
            Some("damaged".to_string()),
            7,
        );
        assert_eq!(patch.return_reason.as_deref(), Some("damaged"));
    }

    #[test]
    fn each_status_sets_exactly_its_own_timestamp() {
        let cases = [
            (OrderStatus::Shipped, 0),
            (OrderStatus::Delivered, 1),
            (OrderStatus::Returned, 2),
            (OrderStatus::Cancelled, 3),
        ];

        for (status, idx) in cases {
            let patch = TransitionPatch::build(status, None, None, 99);
            let stamps = timestamps(&patch);
            for (i, stamp) in stamps.iter().enumerate() {
                if i == idx {
                    assert_eq!(*stamp, Some(99), "{status} must stamp its own field");
                } else {
                    assert_eq!(*stamp, None, "{status} must not stamp field {i}");
                }
            }
        }
    }

    #[test]
    fn pending_and_confirmed_add_no_fields() {
        for status in [OrderStatus::Pending, OrderStatus::Confirmed] {
            let patch = TransitionPatch::build(
                status,
                Some("TRACK-1".to_string()),
                Some("reason".to_string()),
                5,
            );
            assert_eq!(timestamps(&patch), [None, None, None, None]);
            // metadata only attaches to the transition it belongs to
            assert_eq!(patch.tracking_number, None);
            assert_eq!(patch.return_reason, None);
            assert_eq!(patch.updated_at, 5);
        }
    }

    #[test]
    fn tracking_number_is_ignored_outside_shipped() {
        let patch = TransitionPatch::build(
            OrderStatus::Delivered,
            Some("TRACK-1".to_string()),
            None,
            5,
        );
        assert_eq!(patch.tracking_number, None);
    }
}
