//! Response types for the attendance API.
//!
//! This module defines the response bodies and the mapping from
//! [`AttendanceError`] to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{AlertLevel, Severity, WorkingDays};
use crate::error::AttendanceError;
use crate::models::{AbsenceRecord, EnrollmentInterval};
use crate::reports::AbsenceStanding;

/// Response body for `POST /absence-limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceLimitResponse {
    /// The interval the limit was computed over.
    pub interval: EnrollmentInterval,
    /// Working-day breakdown of the interval.
    pub working_days: WorkingDays,
    /// Maximum absences allowed.
    pub absence_limit: u32,
    /// Severity of the given absences against the limit.
    pub severity: Severity,
    /// Alert to send, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertLevel>,
}

/// Response body for `POST /activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// Whether the interval overlaps the window.
    pub active: bool,
    /// First day of the window.
    pub window_start: NaiveDate,
    /// Last day of the window.
    pub window_end: NaiveDate,
}

/// Response body for the per-intern absence endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternAbsencesResponse {
    /// Where the intern stands against their allowance.
    pub standing: AbsenceStanding,
    /// The intern's absence records, oldest first.
    pub absences: Vec<AbsenceRecord>,
}

/// Response body for `POST /interns/{id}/absences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAbsenceResponse {
    /// The record that was created.
    pub absence: AbsenceRecord,
    /// The intern's standing after recording it.
    pub standing: AbsenceStanding,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AttendanceError> for ApiErrorResponse {
    fn from(error: AttendanceError) -> Self {
        let message = error.to_string();
        match error {
            AttendanceError::InvalidInterval { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    message,
                    "The start date must be on or before the end date",
                ),
            },
            AttendanceError::InvalidDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates must be valid calendar dates in YYYY-MM-DD format",
                ),
            },
            AttendanceError::InvalidWindow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WINDOW",
                    message,
                    "The month must be between 1 and 12",
                ),
            },
            AttendanceError::InvalidIntern { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_INTERN", message),
            },
            AttendanceError::InternNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("INTERN_NOT_FOUND", message),
            },
            AttendanceError::DuplicateIntern { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_INTERN", message),
            },
            AttendanceError::AbsenceOutsideEnrollment { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "ABSENCE_OUTSIDE_ENROLLMENT",
                    message,
                    "Absences can only be recorded within the enrollment interval",
                ),
            },
            AttendanceError::InvalidAbsence { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ABSENCE", message),
            },
            AttendanceError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            AttendanceError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_intern_not_found_is_404() {
        let response: ApiErrorResponse = AttendanceError::InternNotFound { id: 42 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "INTERN_NOT_FOUND");
        assert!(response.error.message.contains("42"));
    }

    #[tokio::test]
    async fn test_error_into_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::from(AttendanceError::DuplicateIntern { id: 7 })
            .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["code"], "DUPLICATE_INTERN");
    }

    #[test]
    fn test_absence_outside_enrollment_is_422() {
        let error = AttendanceError::AbsenceOutsideEnrollment {
            intern_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "ABSENCE_OUTSIDE_ENROLLMENT");
    }

    #[test]
    fn test_invalid_interval_is_400() {
        let error = AttendanceError::InvalidInterval {
            start: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_INTERVAL");
    }

    #[test]
    fn test_config_errors_are_500() {
        let response: ApiErrorResponse = AttendanceError::ConfigNotFound {
            path: "roster.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert!(response.error.details.unwrap().contains("roster.yaml"));
    }
}
