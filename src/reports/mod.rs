//! Reports built from the registry.
//!
//! - [`absence_overview`]: where every intern stands against their absence
//!   allowance
//! - [`monthly_report`]: interns, internship kinds and projects active in a
//!   month
//! - [`deliverables_in_window`]: deliverable progress for a month
//! - [`dashboard_summary`]: registry-wide headline counts

mod absences;
mod monthly;
mod summary;

pub use absences::{AbsenceStanding, absence_overview, absence_standing};
pub use monthly::{
    DeliverableLine, DeliverableReport, InternshipKindStats, MonthlyReport, ProjectActivity,
    ProjectFilter, ProjectStatus, active_interns, deliverables_in_window, internship_stats,
    monthly_report, project_activity, report_years,
};
pub use summary::{DashboardSummary, dashboard_summary};
