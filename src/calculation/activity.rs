//! Calendar-window activity tests.
//!
//! Monthly reports list only the interns, projects and deliverables that are
//! active during the selected (month, year) window. Every report uses the
//! same overlap rule, implemented here.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::models::{CalendarWindow, EnrollmentInterval};

/// Returns true if the interval overlaps the window.
///
/// The interval is active iff it starts on or before the last day of the
/// month and ends on or after the first day of the month.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::is_active_in_window;
/// use intern_attendance::models::{CalendarWindow, EnrollmentInterval};
///
/// let interval = EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap();
///
/// assert!(is_active_in_window(&interval, &CalendarWindow::new(6, 2024).unwrap()));
/// assert!(is_active_in_window(&interval, &CalendarWindow::new(1, 2024).unwrap()));
/// assert!(!is_active_in_window(&interval, &CalendarWindow::new(7, 2024).unwrap()));
/// assert!(!is_active_in_window(&interval, &CalendarWindow::new(12, 2023).unwrap()));
/// ```
pub fn is_active_in_window(interval: &EnrollmentInterval, window: &CalendarWindow) -> bool {
    interval.start_date() <= window.last_day() && interval.end_date() >= window.first_day()
}

/// Collects the distinct years in which the given intervals start or end,
/// in ascending order. Used to populate report year selectors.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::unique_years;
/// use intern_attendance::models::EnrollmentInterval;
///
/// let intervals = [
///     EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap(),
///     EnrollmentInterval::parse("2028-02-01", "2028-07-01").unwrap(),
///     EnrollmentInterval::parse("2024-11-01", "2025-03-01").unwrap(),
/// ];
/// assert_eq!(unique_years(&intervals), vec![2024, 2025, 2028]);
/// ```
pub fn unique_years<'a>(intervals: impl IntoIterator<Item = &'a EnrollmentInterval>) -> Vec<i32> {
    intervals
        .into_iter()
        .flat_map(|interval| [interval.start_date().year(), interval.end_date().year()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
