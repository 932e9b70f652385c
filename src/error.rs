//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition rejected at the boundary of the engine: malformed
//! dates and intervals, unknown interns, refused absences and configuration
//! problems.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// The calculator itself never fails; every variant here describes input
/// that was rejected before it could reach a calculation.
///
/// # Example
///
/// ```
/// use intern_attendance::error::AttendanceError;
///
/// let error = AttendanceError::InternNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Intern not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// An enrollment interval started after it ended.
    #[error("Invalid interval: start date {start} is after end date {end}")]
    InvalidInterval {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A date string could not be parsed as an ISO calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A calendar window had a month outside 1..=12 or an unrepresentable year.
    #[error("Invalid calendar window: month {month}, year {year}")]
    InvalidWindow {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// An intern record was missing a required field or had a malformed one.
    #[error("Invalid intern field '{field}': {message}")]
    InvalidIntern {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No intern with the given identifier exists in the registry.
    #[error("Intern not found: {id}")]
    InternNotFound {
        /// The identifier that was looked up.
        id: u32,
    },

    /// An intern with the given identifier is already registered.
    #[error("Intern already registered: {id}")]
    DuplicateIntern {
        /// The conflicting identifier.
        id: u32,
    },

    /// An absence was dated outside its owner's enrollment interval.
    #[error("Absence on {date} is outside the enrollment interval of intern {intern_id}")]
    AbsenceOutsideEnrollment {
        /// The intern the absence was recorded for.
        intern_id: u32,
        /// The rejected absence date.
        date: NaiveDate,
    },

    /// An absence record was missing a required field.
    #[error("Invalid absence field '{field}': {message}")]
    InvalidAbsence {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return AttendanceError.
pub type AttendanceResult<T> = Result<T, AttendanceError>;
