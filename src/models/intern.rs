//! Intern model and related types.
//!
//! This module defines the [`Intern`] record together with the
//! [`InternshipKind`] and [`InternStatus`] enums.

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

use super::EnrollmentInterval;

/// The kind of internship an intern is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipKind {
    /// End-of-year project internship (PFA).
    Pfa,
    /// End-of-studies project internship (PFE).
    Pfe,
    /// Introductory internship.
    Initiation,
    /// Applied-skills internship.
    Application,
    /// Observation internship.
    Observation,
    /// Optional, non-curricular internship.
    Optional,
}

impl std::fmt::Display for InternshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternshipKind::Pfa => write!(f, "PFA"),
            InternshipKind::Pfe => write!(f, "PFE"),
            InternshipKind::Initiation => write!(f, "Initiation"),
            InternshipKind::Application => write!(f, "Application"),
            InternshipKind::Observation => write!(f, "Observation"),
            InternshipKind::Optional => write!(f, "Optional"),
        }
    }
}

/// Where an intern is in the internship lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternStatus {
    /// The internship is confirmed.
    Confirmed,
    /// The internship is awaiting confirmation.
    Unconfirmed,
    /// The internship is over.
    Completed,
}

/// An intern tracked by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    /// Unique identifier for the intern.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Contact email, also used for absence alerts.
    pub email: String,
    /// The kind of internship.
    pub internship: InternshipKind,
    /// Lifecycle status.
    pub status: InternStatus,
    /// Supervisor on the company side.
    pub company_supervisor: String,
    /// Name of the project the intern works on.
    pub project: String,
    /// Working group, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Department, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// The dates the internship runs.
    pub enrollment: EnrollmentInterval,
    /// Running count of absences used for severity classification.
    #[serde(default)]
    pub absence_count: u32,
}

impl Intern {
    /// Checks the fields that must be present for the intern to be usable.
    ///
    /// # Example
    ///
    /// ```
    /// use intern_attendance::models::{EnrollmentInterval, Intern, InternStatus, InternshipKind};
    ///
    /// let mut intern = Intern {
    ///     id: 1,
    ///     name: "Alice Johnson".to_string(),
    ///     email: "alice.johnson@email.com".to_string(),
    ///     internship: InternshipKind::Pfa,
    ///     status: InternStatus::Confirmed,
    ///     company_supervisor: "John Manager".to_string(),
    ///     project: "Mobile Application Development".to_string(),
    ///     group: None,
    ///     department: None,
    ///     enrollment: EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap(),
    ///     absence_count: 0,
    /// };
    /// assert!(intern.validate().is_ok());
    ///
    /// intern.email = "not-an-email".to_string();
    /// assert!(intern.validate().is_err());
    /// ```
    pub fn validate(&self) -> AttendanceResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("company_supervisor", &self.company_supervisor),
            ("project", &self.project),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AttendanceError::InvalidIntern {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if !self.email.contains('@') {
            return Err(AttendanceError::InvalidIntern {
                field: "email".to_string(),
                message: format!("'{}' is not an email address", self.email),
            });
        }

        Ok(())
    }

    /// Case-insensitive match of `term` against name, email, internship kind
    /// and project. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.internship.to_string().to_lowercase().contains(&term)
            || self.project.to_lowercase().contains(&term)
    }
}
