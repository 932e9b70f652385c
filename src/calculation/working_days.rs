//! Working-day counting over an enrollment interval.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::models::{EnrollmentInterval, HolidaySet};

use super::{DayType, get_day_type, is_weekend};

/// Breakdown of the days in an enrollment interval.
///
/// `weekend_days` and `holiday_days` never overlap: a holiday on a weekend
/// counts as a weekend day only.
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::WorkingDays;
///
/// let days = WorkingDays { total_days: 31, weekend_days: 8, holiday_days: 2, working_days: 21 };
/// assert_eq!(days.non_working_days(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDays {
    /// Calendar days in the interval, both endpoints counted.
    pub total_days: u32,
    /// Saturdays and Sundays in the interval.
    pub weekend_days: u32,
    /// Holidays in the interval that fall on a weekday.
    pub holiday_days: u32,
    /// Days that are neither weekend days nor holidays.
    pub working_days: u32,
}

impl WorkingDays {
    /// Weekend days plus weekday holidays.
    pub fn non_working_days(&self) -> u32 {
        self.weekend_days + self.holiday_days
    }
}

/// Counts the working days of an interval.
///
/// Every run of seven consecutive days holds exactly two weekend days, so
/// whole weeks are counted arithmetically and only the trailing partial week
/// is inspected day by day. Holidays are looked up by range; one falling on a
/// Saturday or Sunday counts as a weekend day only. The cost is bounded by the
/// number of holidays in range, not by the interval length.
///
/// # Arguments
///
/// * `interval` - The enrollment interval (ordered by construction)
/// * `holidays` - The holidays to exclude
///
/// # Example
///
/// ```
/// use intern_attendance::calculation::count_working_days;
/// use intern_attendance::models::{EnrollmentInterval, HolidaySet, parse_date};
///
/// let interval = EnrollmentInterval::parse("2024-01-01", "2024-01-31").unwrap();
/// let holidays = HolidaySet::from_dates([
///     parse_date("2024-01-01").unwrap(),
///     parse_date("2024-01-11").unwrap(),
/// ]);
///
/// let days = count_working_days(&interval, &holidays);
/// assert_eq!(days.total_days, 31);
/// assert_eq!(days.weekend_days, 8);
/// assert_eq!(days.holiday_days, 2);
/// assert_eq!(days.working_days, 21);
/// ```
pub fn count_working_days(interval: &EnrollmentInterval, holidays: &HolidaySet) -> WorkingDays {
    let total_days = interval.total_days();
    let full_weeks = total_days / 7;
    let remainder = total_days % 7;

    // The partial week is the last `remainder` days of the interval.
    let end = interval.end_date();
    let trailing_weekend_days = (0..remainder)
        .filter_map(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .filter(|date| is_weekend(*date))
        .count() as u32;

    let weekend_days = full_weeks * 2 + trailing_weekend_days;
    let holiday_days = holidays
        .between(interval.start_date(), end)
        .filter(|holiday| get_day_type(holiday.date, holidays) == DayType::Holiday)
        .count() as u32;

    WorkingDays {
        total_days,
        weekend_days,
        holiday_days,
        working_days: total_days - weekend_days - holiday_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn interval(start: &str, end: &str) -> EnrollmentInterval {
        EnrollmentInterval::parse(start, end).unwrap()
    }

    #[test]
    fn test_january_2024_with_two_holidays() {
        let holidays = HolidaySet::from_dates([make_date("2024-01-01"), make_date("2024-01-11")]);
        let days = count_working_days(&interval("2024-01-01", "2024-01-31"), &holidays);

        assert_eq!(days.total_days, 31);
        assert_eq!(days.weekend_days, 8);
        assert_eq!(days.holiday_days, 2);
        assert_eq!(days.non_working_days(), 10);
        assert_eq!(days.working_days, 21);
    }

    #[test]
    fn test_single_weekday() {
        // 2024-01-10 is a Wednesday
        let days = count_working_days(&interval("2024-01-10", "2024-01-10"), &HolidaySet::empty());
        assert_eq!(days.total_days, 1);
        assert_eq!(days.working_days, 1);
    }

    #[test]
    fn test_single_weekday_holiday() {
        let holidays = HolidaySet::from_dates([make_date("2024-01-11")]);
        let days = count_working_days(&interval("2024-01-11", "2024-01-11"), &holidays);
        assert_eq!(days.working_days, 0);
        assert_eq!(days.holiday_days, 1);
    }

    #[test]
    fn test_weekend_only() {
        // 2024-01-13 and 2024-01-14 are Saturday and Sunday
        let days = count_working_days(&interval("2024-01-13", "2024-01-14"), &HolidaySet::empty());
        assert_eq!(days.total_days, 2);
        assert_eq!(days.weekend_days, 2);
        assert_eq!(days.working_days, 0);
    }

    #[test]
    fn test_weekend_holiday_not_counted_twice() {
        // 2024-07-07 is a Sunday holiday; 2024-07-01..07 is Monday to Sunday
        let holidays = HolidaySet::builtin();
        let days = count_working_days(&interval("2024-07-01", "2024-07-07"), &holidays);
        assert_eq!(days.weekend_days, 2);
        assert_eq!(days.holiday_days, 0);
        assert_eq!(days.working_days, 5);
    }

    #[test]
    fn test_builtin_holidays_over_first_internship() {
        // Jan 15 to Jun 15 2024: 153 days, 43 weekend days, 3 weekday holidays
        let days = count_working_days(&interval("2024-01-15", "2024-06-15"), &HolidaySet::builtin());
        assert_eq!(days.total_days, 153);
        assert_eq!(days.weekend_days, 43);
        assert_eq!(days.holiday_days, 3);
        assert_eq!(days.working_days, 107);
    }

    #[test]
    fn test_parts_sum_to_total() {
        let days = count_working_days(&interval("2024-03-10", "2024-09-10"), &HolidaySet::builtin());
        assert_eq!(
            days.working_days + days.weekend_days + days.holiday_days,
            days.total_days
        );
    }

    #[test]
    fn test_full_date_range_counts_without_walking_days() {
        let interval = EnrollmentInterval::new(NaiveDate::MIN, NaiveDate::MAX).unwrap();
        let days = count_working_days(&interval, &HolidaySet::builtin());

        assert_eq!(days.total_days, interval.total_days());
        assert_eq!(days.holiday_days, 14);
        assert_eq!(
            days.working_days + days.weekend_days + days.holiday_days,
            days.total_days
        );
        // Five weekdays in every seven, give or take one partial week.
        let weekdays = days.total_days - days.weekend_days;
        assert!(weekdays.abs_diff(days.total_days / 7 * 5) <= 5);
    }

    #[test]
    fn test_interval_ending_on_weekend_partial_week() {
        // Monday 2024-01-01 to Saturday 2024-01-13: one full week plus six days
        let days = count_working_days(&interval("2024-01-01", "2024-01-13"), &HolidaySet::empty());
        assert_eq!(days.total_days, 13);
        assert_eq!(days.weekend_days, 3);
        assert_eq!(days.working_days, 10);
    }

    fn walk_days(interval: &EnrollmentInterval, holidays: &HolidaySet) -> WorkingDays {
        let mut result = WorkingDays {
            total_days: 0,
            weekend_days: 0,
            holiday_days: 0,
            working_days: 0,
        };
        for date in interval.days() {
            result.total_days += 1;
            match get_day_type(date, holidays) {
                DayType::Working => result.working_days += 1,
                DayType::Weekend => result.weekend_days += 1,
                DayType::Holiday => result.holiday_days += 1,
            }
        }
        result
    }

    proptest! {
        #[test]
        fn prop_matches_day_by_day_walk(offset in 0i64..1200, length in 0i64..800) {
            let start = make_date("2023-06-01") + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(length);
            let interval = EnrollmentInterval::new(start, end).unwrap();
            let holidays = HolidaySet::builtin();

            prop_assert_eq!(
                count_working_days(&interval, &holidays),
                walk_days(&interval, &holidays)
            );
        }
    }
}
