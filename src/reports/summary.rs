//! Headline figures for the dashboard.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::InternStatus;
use crate::registry::InternshipRegistry;

/// Registry-wide counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Every registered intern.
    pub total_interns: usize,
    /// Distinct projects of interns whose internship is not completed.
    pub ongoing_projects: usize,
    /// Sum of the running absence counts.
    pub total_absences: u64,
    /// Catalog deliverables not yet marked complete.
    pub outstanding_deliverables: usize,
}

/// Computes the dashboard summary.
///
/// # Example
///
/// ```
/// use intern_attendance::config::ConfigLoader;
/// use intern_attendance::registry::InternshipRegistry;
/// use intern_attendance::reports::dashboard_summary;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let registry = InternshipRegistry::from_roster(loader.roster()).unwrap();
///
/// let summary = dashboard_summary(&registry);
/// assert_eq!(summary.total_interns, 10);
/// assert_eq!(summary.outstanding_deliverables, 7);
/// ```
pub fn dashboard_summary(registry: &InternshipRegistry) -> DashboardSummary {
    let ongoing: BTreeSet<&str> = registry
        .interns()
        .filter(|intern| intern.status != InternStatus::Completed)
        .map(|intern| intern.project.as_str())
        .collect();

    DashboardSummary {
        total_interns: registry.len(),
        ongoing_projects: ongoing.len(),
        total_absences: registry
            .interns()
            .map(|intern| u64::from(intern.absence_count))
            .sum(),
        outstanding_deliverables: registry
            .projects()
            .iter()
            .flat_map(|project| &project.deliverables)
            .filter(|deliverable| !deliverable.is_completed)
            .count(),
    }
}
