//! Calculation logic for the attendance engine.
//!
//! This module contains the pure calculations the reports are built on: day
//! detection, working-day counting, the absence limit, severity
//! classification and alerts, calendar-window activity tests, and
//! deliverable delivery status. None of them hold state or perform I/O.

mod absence_limit;
mod activity;
mod day_detection;
mod delivery;
mod severity;
mod working_days;

pub use absence_limit::{
    ABSENCE_LIMIT_RATIO, absence_limit_for_working_days, compute_absence_limit,
};
pub use activity::{is_active_in_window, unique_years};
pub use day_detection::{DayType, get_day_type, is_weekend};
pub use delivery::{DeliveryStatus, deliverable_in_window, delivery_status};
pub use severity::{
    AlertLevel, CRITICAL_THRESHOLD, REMINDER_ALERT_MAX, REMINDER_ALERT_MIN, Severity,
    SeverityTier, WARNING_THRESHOLD, alert_level, classify_severity,
};
pub use working_days::{WorkingDays, count_working_days};
