//! Absence limit calculation.
//!
//! The permitted number of absence days is 20% of the working days of the
//! enrollment interval, rounded up so that any interval with at least one
//! working day allows at least one absence.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{EnrollmentInterval, HolidaySet};

use super::count_working_days;

/// Share of working days an intern may be absent: 0.2.
pub const ABSENCE_LIMIT_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Applies [`ABSENCE_LIMIT_RATIO`] to a working-day count, rounding up.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::absence_limit_for_working_days;
///
/// assert_eq!(absence_limit_for_working_days(0), 0);
/// assert_eq!(absence_limit_for_working_days(1), 1);
/// assert_eq!(absence_limit_for_working_days(21), 5);
/// assert_eq!(absence_limit_for_working_days(25), 5);
/// ```
pub fn absence_limit_for_working_days(working_days: u32) -> u32 {
    let limit = (Decimal::from(working_days) * ABSENCE_LIMIT_RATIO).ceil();
    // At most `working_days`, so always representable.
    limit.to_u32().unwrap_or(working_days)
}

/// Computes the maximum number of permitted absence days for an interval.
///
/// # Arguments
///
/// * `interval` - The enrollment interval
/// * `holidays` - The holidays excluded from the working days
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::compute_absence_limit;
/// use intern_attendance::models::{EnrollmentInterval, HolidaySet, parse_date};
///
/// let interval = EnrollmentInterval::parse("2024-01-01", "2024-01-31").unwrap();
/// let holidays = HolidaySet::from_dates([
///     parse_date("2024-01-01").unwrap(),
///     parse_date("2024-01-11").unwrap(),
/// ]);
///
/// // 21 working days * 0.2 = 4.2, rounded up
/// assert_eq!(compute_absence_limit(&interval, &holidays), 5);
/// ```
pub fn compute_absence_limit(interval: &EnrollmentInterval, holidays: &HolidaySet) -> u32 {
    absence_limit_for_working_days(count_working_days(interval, holidays).working_days)
}
