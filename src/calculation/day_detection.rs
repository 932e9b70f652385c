//! Day detection for working-day counting.
//!
//! This module classifies a calendar date as a working day, a weekend day or
//! a holiday. Weekends take precedence: a holiday falling on a Saturday or
//! Sunday is reported as [`DayType::Weekend`], so it is never excluded twice.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidaySet;

/// Represents the type of a calendar day for attendance purposes.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A listed holiday falling on a weekday.
    Holiday,
}

impl DayType {
    /// Returns true for [`DayType::Working`].
    pub fn is_working(self) -> bool {
        self == DayType::Working
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Working => write!(f, "Working"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true if `date` is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines the day type for a given date.
///
/// # Arguments
///
/// * `date` - The date to classify
/// * `holidays` - The holidays in force
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::{get_day_type, DayType};
/// use intern_attendance::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::builtin();
///
/// // 2024-01-11 is a Thursday and a holiday
/// let thursday = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
/// assert_eq!(get_day_type(thursday, &holidays), DayType::Holiday);
///
/// // 2024-01-13 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
/// assert_eq!(get_day_type(saturday, &holidays), DayType::Weekend);
///
/// // 2024-01-12 is an ordinary Friday
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
/// assert_eq!(get_day_type(friday, &holidays), DayType::Working);
/// ```
pub fn get_day_type(date: NaiveDate, holidays: &HolidaySet) -> DayType {
    if is_weekend(date) {
        DayType::Weekend
    } else if holidays.contains(date) {
        DayType::Holiday
    } else {
        DayType::Working
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekdays_are_working_days() {
        let holidays = HolidaySet::empty();
        // 2024-01-08 is a Monday
        for day in ["2024-01-08", "2024-01-09", "2024-01-10", "2024-01-11", "2024-01-12"] {
            assert_eq!(get_day_type(make_date(day), &holidays), DayType::Working, "{}", day);
        }
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        let holidays = HolidaySet::empty();
        assert_eq!(get_day_type(make_date("2024-01-06"), &holidays), DayType::Weekend);
        assert_eq!(get_day_type(make_date("2024-01-07"), &holidays), DayType::Weekend);
    }

    #[test]
    fn test_weekday_holiday_is_holiday() {
        let holidays = HolidaySet::from_dates([make_date("2024-01-01")]);
        // 2024-01-01 is a Monday
        assert_eq!(get_day_type(make_date("2024-01-01"), &holidays), DayType::Holiday);
    }

    #[test]
    fn test_weekend_takes_precedence_over_holiday() {
        // 2024-07-07 is a Sunday and a listed holiday
        let holidays = HolidaySet::builtin();
        assert_eq!(get_day_type(make_date("2024-07-07"), &holidays), DayType::Weekend);
    }

    #[test]
    fn test_is_working() {
        assert!(DayType::Working.is_working());
        assert!(!DayType::Weekend.is_working());
        assert!(!DayType::Holiday.is_working());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(format!("{}", DayType::Working), "Working");
        assert_eq!(format!("{}", DayType::Weekend), "Weekend");
        assert_eq!(format!("{}", DayType::Holiday), "Holiday");
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Holiday).unwrap();
        assert_eq!(json, "\"holiday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Holiday);
    }
}
