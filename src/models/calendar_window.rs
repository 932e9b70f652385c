//! Calendar window model.
//!
//! A [`CalendarWindow`] identifies one (month, year) reporting period. It has
//! no identity of its own and exists only to be tested for overlap against
//! enrollment intervals and deliverable dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

/// A single (month, year) reporting period.
///
/// The first and last calendar days of the month are resolved at
/// construction, so an invalid month or an unrepresentable year is rejected
/// up front.
///
/// # Example
///
/// ```
/// use intern_attendance::models::CalendarWindow;
/// use chrono::NaiveDate;
///
/// let february = CalendarWindow::new(2, 2024).unwrap();
/// assert_eq!(february.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(february.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(CalendarWindow::new(13, 2024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct CalendarWindow {
    month: u32,
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

/// Wire form of a window: just the month and year.
#[derive(Serialize, Deserialize)]
struct RawWindow {
    month: u32,
    year: i32,
}

impl TryFrom<RawWindow> for CalendarWindow {
    type Error = AttendanceError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        CalendarWindow::new(raw.month, raw.year)
    }
}

impl From<CalendarWindow> for RawWindow {
    fn from(window: CalendarWindow) -> Self {
        RawWindow {
            month: window.month,
            year: window.year,
        }
    }
}

impl CalendarWindow {
    /// Creates the window for `month` (1-12) of `year`.
    pub fn new(month: u32, year: i32) -> AttendanceResult<Self> {
        let invalid = || AttendanceError::InvalidWindow { month, year };

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            month,
            year,
            first_day,
            last_day,
        })
    }

    /// Creates the window containing `date`.
    pub fn containing(date: NaiveDate) -> AttendanceResult<Self> {
        Self::new(date.month(), date.year())
    }

    /// The month of the window (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year of the window.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns true if `date` falls in this month and year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl std::fmt::Display for CalendarWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
