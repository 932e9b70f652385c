//! Request types for the attendance API.
//!
//! Dates arrive as plain `YYYY-MM-DD` strings and are parsed in the handlers
//! so that a bad date is reported as `INVALID_DATE` rather than as a JSON
//! error.

use serde::{Deserialize, Serialize};

use crate::error::AttendanceResult;
use crate::models::{CalendarWindow, EnrollmentInterval, HolidaySet, parse_date};
use crate::reports::{ProjectFilter, ProjectStatus};

/// Request body for `POST /absence-limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceLimitRequest {
    /// First day of the interval (inclusive).
    pub start_date: String,
    /// Last day of the interval (inclusive).
    pub end_date: String,
    /// Absences taken so far, used for severity.
    #[serde(default)]
    pub absences: u32,
    /// Holiday dates to use instead of the configured calendar.
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
}

impl AbsenceLimitRequest {
    /// Parses the interval.
    pub fn interval(&self) -> AttendanceResult<EnrollmentInterval> {
        EnrollmentInterval::parse(&self.start_date, &self.end_date)
    }

    /// Parses the holiday override, if one was given.
    pub fn holiday_override(&self) -> AttendanceResult<Option<HolidaySet>> {
        self.holidays
            .as_ref()
            .map(|dates| {
                dates
                    .iter()
                    .map(|date| parse_date(date))
                    .collect::<AttendanceResult<Vec<_>>>()
                    .map(HolidaySet::from_dates)
            })
            .transpose()
    }
}

/// Request body for `POST /activity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    /// First day of the interval (inclusive).
    pub start_date: String,
    /// Last day of the interval (inclusive).
    pub end_date: String,
    /// Month of the window, 1 to 12.
    pub month: u32,
    /// Year of the window.
    pub year: i32,
}

impl ActivityRequest {
    /// Parses the interval and the window.
    pub fn parse(&self) -> AttendanceResult<(EnrollmentInterval, CalendarWindow)> {
        let interval = EnrollmentInterval::parse(&self.start_date, &self.end_date)?;
        let window = CalendarWindow::new(self.month, self.year)?;
        Ok((interval, window))
    }
}

/// Request body for `POST /interns/{id}/absences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAbsenceRequest {
    /// The day of absence.
    pub date: String,
    /// Why the intern was absent.
    pub justification: String,
}

/// Query string of `GET /interns/absences`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive name filter.
    #[serde(default)]
    pub search: Option<String>,
}

/// Query string of the monthly report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowQuery {
    /// Month of the window, 1 to 12.
    pub month: u32,
    /// Year of the window.
    pub year: i32,
    /// Case-insensitive project name filter.
    #[serde(default)]
    pub search: Option<String>,
    /// Department filter for the monthly project list.
    #[serde(default)]
    pub department: Option<String>,
    /// Status filter for the monthly project list: `completed` or
    /// `in_progress`.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl WindowQuery {
    /// Builds the calendar window.
    pub fn window(&self) -> AttendanceResult<CalendarWindow> {
        CalendarWindow::new(self.month, self.year)
    }

    /// The project filter carried by the query.
    pub fn project_filter(&self) -> ProjectFilter {
        ProjectFilter {
            department: self.department.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttendanceError;

    #[test]
    fn test_absence_limit_request_defaults() {
        let json = r#"{"start_date": "2024-01-01", "end_date": "2024-01-31"}"#;
        let request: AbsenceLimitRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.absences, 0);
        assert!(request.holiday_override().unwrap().is_none());
        assert_eq!(request.interval().unwrap().total_days(), 31);
    }

    #[test]
    fn test_holiday_override_parsed() {
        let request = AbsenceLimitRequest {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            absences: 0,
            holidays: Some(vec!["2024-01-01".to_string(), "2024-01-02".to_string()]),
        };

        let holidays = request.holiday_override().unwrap().unwrap();
        assert_eq!(holidays.len(), 2);
    }

    #[test]
    fn test_bad_holiday_date_rejected() {
        let request = AbsenceLimitRequest {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            absences: 0,
            holidays: Some(vec!["2024-02-30".to_string()]),
        };

        assert!(matches!(
            request.holiday_override(),
            Err(AttendanceError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_activity_request_invalid_month() {
        let request = ActivityRequest {
            start_date: "2024-01-15".to_string(),
            end_date: "2024-06-15".to_string(),
            month: 13,
            year: 2024,
        };

        assert!(matches!(
            request.parse(),
            Err(AttendanceError::InvalidWindow { month: 13, .. })
        ));
    }

    #[test]
    fn test_window_query_project_filter() {
        let json = r#"{"month": 6, "year": 2024, "department": "Finance", "status": "in_progress"}"#;
        let query: WindowQuery = serde_json::from_str(json).unwrap();

        let filter = query.project_filter();
        assert_eq!(filter.department.as_deref(), Some("Finance"));
        assert_eq!(filter.status, Some(ProjectStatus::InProgress));
    }

    #[test]
    fn test_window_query_without_filters() {
        let query: WindowQuery = serde_json::from_str(r#"{"month": 6, "year": 2024}"#).unwrap();
        assert_eq!(query.project_filter(), ProjectFilter::default());
    }
}
