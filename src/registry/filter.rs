//! Roster filtering.

use serde::Deserialize;

use crate::models::{Intern, InternStatus};

/// Criteria for narrowing down the roster.
///
/// Every criterion is optional; an empty filter matches every intern.
///
/// # Example
///
/// ```
/// use intern_attendance::models::InternStatus;
/// use intern_attendance::registry::InternFilter;
///
/// let filter = InternFilter {
///     search: Some("pfa".to_string()),
///     status: Some(InternStatus::Confirmed),
///     project: None,
/// };
/// assert!(!filter.is_empty());
/// assert!(InternFilter::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InternFilter {
    /// Case-insensitive term matched against name, email, internship kind
    /// and project.
    #[serde(default)]
    pub search: Option<String>,
    /// Only interns with this status.
    #[serde(default)]
    pub status: Option<InternStatus>,
    /// Only interns on the project with exactly this name.
    #[serde(default)]
    pub project: Option<String>,
}

impl InternFilter {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.status.is_none() && self.project.is_none()
    }

    /// Returns true if the intern satisfies every criterion that is set.
    pub fn matches(&self, intern: &Intern) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| intern.matches_search(term));
        let status_ok = self.status.is_none_or(|status| intern.status == status);
        let project_ok = self
            .project
            .as_deref()
            .is_none_or(|project| intern.project == project);

        search_ok && status_ok && project_ok
    }
}
