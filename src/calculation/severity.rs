//! Absence severity classification.
//!
//! This module turns an actual absence count and a permitted limit into a
//! percentage of the allowance used, a severity tier, and the alert an
//! administrator should send.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Percentage from which absences are at least [`SeverityTier::Warning`].
pub const WARNING_THRESHOLD: u32 = 50;

/// Percentage from which absences are [`SeverityTier::Critical`].
pub const CRITICAL_THRESHOLD: u32 = 100;

/// Lowest percentage that triggers a reminder alert.
pub const REMINDER_ALERT_MIN: u32 = 60;

/// Highest percentage that still triggers only a reminder; above it the alert is urgent.
pub const REMINDER_ALERT_MAX: u32 = 80;

/// How serious an intern's absence level is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Under half the allowance used.
    Normal,
    /// Half the allowance or more, but not all of it.
    Warning,
    /// The allowance is used up or exceeded.
    Critical,
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityTier::Normal => write!(f, "normal"),
            SeverityTier::Warning => write!(f, "warning"),
            SeverityTier::Critical => write!(f, "critical"),
        }
    }
}

/// The result of classifying an absence count against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Severity {
    /// Share of the allowance used, rounded to a whole percent.
    pub percentage: u32,
    /// The tier the percentage falls into.
    pub tier: SeverityTier,
}

/// Classifies an absence count against the permitted limit.
///
/// The percentage is `actual / limit * 100`, rounded half up. A limit of zero
/// always reports 0% regardless of the absence count, so an intern with no
/// working days is never flagged.
///
/// # Arguments
///
/// * `actual_absences` - Absences taken so far
/// * `limit` - The permitted number of absences
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::{classify_severity, SeverityTier};
///
/// let severity = classify_severity(3, 5);
/// assert_eq!(severity.percentage, 60);
/// assert_eq!(severity.tier, SeverityTier::Warning);
///
/// let severity = classify_severity(5, 5);
/// assert_eq!(severity.percentage, 100);
/// assert_eq!(severity.tier, SeverityTier::Critical);
///
/// let severity = classify_severity(4, 0);
/// assert_eq!(severity.percentage, 0);
/// assert_eq!(severity.tier, SeverityTier::Normal);
/// ```
pub fn classify_severity(actual_absences: u32, limit: u32) -> Severity {
    let percentage = absence_percentage(actual_absences, limit);
    let tier = if percentage >= CRITICAL_THRESHOLD {
        SeverityTier::Critical
    } else if percentage >= WARNING_THRESHOLD {
        SeverityTier::Warning
    } else {
        SeverityTier::Normal
    };

    Severity { percentage, tier }
}

fn absence_percentage(actual_absences: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let ratio = Decimal::from(actual_absences) / Decimal::from(limit) * Decimal::ONE_HUNDRED;
    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        // Bounded by actual_absences * 100, which only overflows u32 for absurd counts.
        .unwrap_or(u32::MAX)
}

/// The alert an administrator should send for an absence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// A routine reminder about absences.
    Reminder,
    /// An urgent warning about absences.
    Urgent,
}

impl AlertLevel {
    /// Subject line used when the alert is sent by email.
    pub fn subject(self) -> &'static str {
        match self {
            AlertLevel::Reminder => "Alert regarding your absences",
            AlertLevel::Urgent => "URGENT alert regarding your absences",
        }
    }
}

/// Determines which alert, if any, a percentage calls for.
///
/// 60% to 80% inclusive warrants a reminder, anything above 80% an urgent
/// alert, and anything below 60% no alert.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::{alert_level, AlertLevel};
///
/// assert_eq!(alert_level(59), None);
/// assert_eq!(alert_level(60), Some(AlertLevel::Reminder));
/// assert_eq!(alert_level(80), Some(AlertLevel::Reminder));
/// assert_eq!(alert_level(81), Some(AlertLevel::Urgent));
/// ```
pub fn alert_level(percentage: u32) -> Option<AlertLevel> {
    if percentage > REMINDER_ALERT_MAX {
        Some(AlertLevel::Urgent)
    } else if percentage >= REMINDER_ALERT_MIN {
        Some(AlertLevel::Reminder)
    } else {
        None
    }
}
