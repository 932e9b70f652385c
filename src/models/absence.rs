//! Absence record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review state of an absence justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// The justification was accepted.
    Validated,
    /// The justification has not been reviewed yet.
    Pending,
    /// The justification was rejected.
    Refused,
}

/// A single day of absence with its justification.
///
/// # Example
///
/// ```
/// use intern_attendance::models::AbsenceRecord;
/// use chrono::NaiveDate;
///
/// let record = AbsenceRecord::new(1, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(), "Illness");
/// assert_eq!(record.intern_id, 1);
/// assert!(record.status.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// Unique identifier for the record.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The intern this absence belongs to.
    pub intern_id: u32,
    /// The day of absence.
    pub date: NaiveDate,
    /// Free-text justification.
    pub justification: String,
    /// Review state, if the justification has been looked at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AbsenceStatus>,
}

impl AbsenceRecord {
    /// Creates an unreviewed record with a fresh identifier.
    pub fn new(intern_id: u32, date: NaiveDate, justification: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            intern_id,
            date,
            justification: justification.into(),
            status: None,
        }
    }
}
