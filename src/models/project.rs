//! Project and deliverable models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated piece of work a project has to hand in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Identifier of the deliverable.
    pub id: u32,
    /// Short description.
    pub label: String,
    /// The due date.
    pub deadline: NaiveDate,
    /// Whether the deliverable has been accepted as complete.
    #[serde(default)]
    pub is_completed: bool,
    /// When it was actually delivered, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
}

/// A project and its deliverables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name; interns reference projects by this name.
    pub name: String,
    /// The deliverables of the project.
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

impl Project {
    /// Number of deliverables marked complete.
    pub fn completed_count(&self) -> usize {
        self.deliverables.iter().filter(|d| d.is_completed).count()
    }

    /// Share of completed deliverables as a percentage, to two decimal places.
    ///
    /// A project without deliverables reports zero progress.
    ///
    /// # Example
    ///
    /// ```
    /// use intern_attendance::models::{Deliverable, Project};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let deadline = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let project = Project {
    ///     name: "Beta".to_string(),
    ///     deliverables: vec![
    ///         Deliverable { id: 1, label: "Specs".to_string(), deadline, is_completed: true, delivery_date: None },
    ///         Deliverable { id: 2, label: "Mockups".to_string(), deadline, is_completed: false, delivery_date: None },
    ///         Deliverable { id: 3, label: "Tests".to_string(), deadline, is_completed: false, delivery_date: None },
    ///     ],
    /// };
    /// assert_eq!(project.progress(), Decimal::from_str("33.33").unwrap());
    /// ```
    pub fn progress(&self) -> Decimal {
        if self.deliverables.is_empty() {
            return Decimal::ZERO;
        }
        let completed = Decimal::from(self.completed_count() as u64);
        let total = Decimal::from(self.deliverables.len() as u64);
        (completed / total * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
