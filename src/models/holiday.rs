//! Holiday and holiday set models.
//!
//! This module contains the [`Holiday`] and [`HolidaySet`] types. A holiday
//! set is the fixed list of non-working days, beyond weekends, that the
//! working-day count excludes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single non-working calendar day.
///
/// # Example
///
/// ```
/// use intern_attendance::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     name: Some("Labour Day".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The holidays observed by the dashboard, bound to the 2024 calendar year
/// plus New Year 2025. Other years need an updated calendar file.
const BUILTIN_HOLIDAYS: [(i32, u32, u32, &str); 16] = [
    (2024, 1, 1, "New Year's Day"),
    (2024, 1, 11, "Proclamation of Independence"),
    (2024, 4, 10, "Eid al-Fitr"),
    (2024, 4, 11, "Eid al-Fitr (second day)"),
    (2024, 5, 1, "Labour Day"),
    (2024, 6, 17, "Eid al-Adha"),
    (2024, 6, 18, "Eid al-Adha (second day)"),
    (2024, 7, 7, "Islamic New Year"),
    (2024, 7, 30, "Throne Day"),
    (2024, 8, 14, "Oued Ed-Dahab Day"),
    (2024, 8, 20, "Revolution of the King and the People"),
    (2024, 8, 21, "Youth Day"),
    (2024, 9, 15, "Mawlid"),
    (2024, 11, 6, "Green March"),
    (2024, 11, 18, "Independence Day"),
    (2025, 1, 1, "New Year's Day"),
];

/// An immutable set of holiday dates.
///
/// Duplicate dates collapse into one entry; the first name seen is kept.
///
/// # Example
///
/// ```
/// use intern_attendance::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::from_dates([
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
/// ]);
///
/// assert_eq!(holidays.len(), 2);
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()));
/// assert!(!holidays.contains(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidaySet {
    /// Builds a set from named holidays.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut map = BTreeMap::new();
        for holiday in holidays {
            map.entry(holiday.date).or_insert(holiday);
        }
        Self { holidays: map }
    }

    /// Builds a set from bare dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::new(dates.into_iter().map(|date| Holiday { date, name: None }))
    }

    /// An empty set: only weekends are non-working.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The holiday list the dashboard ships with.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_HOLIDAYS.iter().filter_map(|&(y, m, d, name)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday {
                date,
                name: Some(name.to_string()),
            })
        }))
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the set has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterates over the holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Iterates over the holidays from `start` to `end` inclusive, in date order.
    ///
    /// Yields nothing when `start` is after `end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &Holiday> {
        let range = if start <= end {
            Some(self.holidays.range(start..=end))
        } else {
            None
        };
        range.into_iter().flatten().map(|(_, holiday)| holiday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_builtin_has_sixteen_dates() {
        let holidays = HolidaySet::builtin();
        assert_eq!(holidays.len(), 16);
        assert!(holidays.contains(make_date("2024-01-01")));
        assert!(holidays.contains(make_date("2024-11-18")));
        assert!(holidays.contains(make_date("2025-01-01")));
        assert!(!holidays.contains(make_date("2025-01-11")));
    }

    #[test]
    fn test_builtin_names() {
        let holidays = HolidaySet::builtin();
        let labour_day = holidays.get(make_date("2024-05-01")).unwrap();
        assert_eq!(labour_day.name.as_deref(), Some("Labour Day"));
    }

    #[test]
    fn test_duplicates_keep_first_name() {
        let holidays = HolidaySet::new([
            Holiday {
                date: make_date("2024-01-01"),
                name: Some("First".to_string()),
            },
            Holiday {
                date: make_date("2024-01-01"),
                name: Some("Second".to_string()),
            },
        ]);
        assert_eq!(holidays.len(), 1);
        assert_eq!(
            holidays.get(make_date("2024-01-01")).unwrap().name.as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let holidays = HolidaySet::from_dates([
            make_date("2024-05-01"),
            make_date("2024-01-11"),
            make_date("2024-01-01"),
        ]);
        let dates: Vec<NaiveDate> = holidays.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2024-01-01"),
                make_date("2024-01-11"),
                make_date("2024-05-01")
            ]
        );
    }

    #[test]
    fn test_empty_set() {
        let holidays = HolidaySet::empty();
        assert!(holidays.is_empty());
        assert!(!holidays.contains(make_date("2024-01-01")));
    }

    #[test]
    fn test_holiday_deserialization_without_name() {
        let holiday: Holiday = serde_json::from_str(r#"{"date":"2024-05-01"}"#).unwrap();
        assert_eq!(holiday.date, make_date("2024-05-01"));
        assert!(holiday.name.is_none());
    }

    #[test]
    fn test_between_is_inclusive() {
        let holidays = HolidaySet::from_dates([
            make_date("2024-01-01"),
            make_date("2024-01-11"),
            make_date("2024-05-01"),
        ]);

        let dates: Vec<NaiveDate> = holidays
            .between(make_date("2024-01-11"), make_date("2024-05-01"))
            .map(|holiday| holiday.date)
            .collect();
        assert_eq!(dates, vec![make_date("2024-01-11"), make_date("2024-05-01")]);
    }

    #[test]
    fn test_between_reversed_bounds_is_empty() {
        let holidays = HolidaySet::builtin();
        assert_eq!(
            holidays
                .between(make_date("2024-12-31"), make_date("2024-01-01"))
                .count(),
            0
        );
    }
}
