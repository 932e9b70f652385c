//! Enrollment interval model.
//!
//! This module defines the [`EnrollmentInterval`] type: the closed range of
//! calendar dates during which an intern is active. The interval is ordered
//! by construction, so every calculation that receives one can rely on
//! `start_date <= end_date`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

/// The date format accepted when parsing dates from strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// # Example
///
/// ```
/// use intern_attendance::models::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2024-01-15").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
/// );
/// assert!(parse_date("15/01/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> AttendanceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| AttendanceError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// A closed range of calendar dates `[start_date, end_date]`.
///
/// Both endpoints are part of the interval. A single-day interval has
/// `start_date == end_date`.
///
/// # Example
///
/// ```
/// use intern_attendance::models::EnrollmentInterval;
///
/// let interval = EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap();
/// assert_eq!(interval.total_days(), 153);
///
/// // Out-of-order dates are rejected rather than normalized.
/// assert!(EnrollmentInterval::parse("2024-06-15", "2024-01-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct EnrollmentInterval {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Unvalidated wire form of an interval.
#[derive(Deserialize)]
struct RawInterval {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawInterval> for EnrollmentInterval {
    type Error = AttendanceError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        EnrollmentInterval::new(raw.start_date, raw.end_date)
    }
}

impl EnrollmentInterval {
    /// Creates an interval, rejecting a start date after the end date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> AttendanceResult<Self> {
        if start_date > end_date {
            return Err(AttendanceError::InvalidInterval {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Parses an interval from two ISO date strings.
    pub fn parse(start_date: &str, end_date: &str) -> AttendanceResult<Self> {
        Self::new(parse_date(start_date)?, parse_date(end_date)?)
    }

    /// Creates an interval covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// The first day of the interval (inclusive).
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of the interval (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns true if `date` falls within the interval, endpoints included.
    ///
    /// # Example
    ///
    /// ```
    /// use intern_attendance::models::{parse_date, EnrollmentInterval};
    ///
    /// let interval = EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap();
    /// assert!(interval.contains(parse_date("2024-01-15").unwrap()));
    /// assert!(interval.contains(parse_date("2024-06-15").unwrap()));
    /// assert!(!interval.contains(parse_date("2024-06-16").unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the interval, both endpoints counted.
    pub fn total_days(&self) -> u32 {
        // Non-negative by construction and bounded by chrono's date range.
        ((self.end_date - self.start_date).num_days() + 1) as u32
    }

    /// Iterates over every date of the interval in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }
}

impl std::fmt::Display for EnrollmentInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start_date, self.end_date)
    }
}
