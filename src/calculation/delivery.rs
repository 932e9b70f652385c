//! Deliverable status and activity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CalendarWindow, Deliverable};

/// Whether a deliverable was handed in, and if so whether on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Not delivered yet.
    Pending,
    /// Delivered on or before the deadline.
    OnTime,
    /// Delivered after the deadline.
    Late,
}

/// Determines the delivery status of a deliverable.
///
/// Delivering on the deadline day itself counts as on time.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::{delivery_status, DeliveryStatus};
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// assert_eq!(delivery_status(deadline, None), DeliveryStatus::Pending);
/// assert_eq!(
///     delivery_status(deadline, NaiveDate::from_ymd_opt(2025, 8, 30)),
///     DeliveryStatus::OnTime
/// );
/// assert_eq!(
///     delivery_status(deadline, NaiveDate::from_ymd_opt(2025, 9, 2)),
///     DeliveryStatus::Late
/// );
/// ```
pub fn delivery_status(deadline: NaiveDate, delivery_date: Option<NaiveDate>) -> DeliveryStatus {
    match delivery_date {
        None => DeliveryStatus::Pending,
        Some(delivered) if delivered <= deadline => DeliveryStatus::OnTime,
        Some(_) => DeliveryStatus::Late,
    }
}

/// Returns true if the deliverable's deadline or delivery date falls in the window.
pub fn deliverable_in_window(deliverable: &Deliverable, window: &CalendarWindow) -> bool {
    window.contains(deliverable.deadline)
        || deliverable
            .delivery_date
            .is_some_and(|delivered| window.contains(delivered))
}
