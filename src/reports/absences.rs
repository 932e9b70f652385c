//! Absence standing of interns against their allowance.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    AlertLevel, Severity, WorkingDays, absence_limit_for_working_days, alert_level,
    classify_severity, count_working_days,
};
use crate::models::{EnrollmentInterval, HolidaySet, Intern};
use crate::registry::InternshipRegistry;

/// Where one intern stands against their absence allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceStanding {
    /// Intern id.
    pub intern_id: u32,
    /// Intern name.
    pub name: String,
    /// Contact email, where alerts are sent.
    pub email: String,
    /// Project name.
    pub project: String,
    /// The enrollment interval the allowance is computed over.
    pub enrollment: EnrollmentInterval,
    /// Working-day breakdown of the enrollment.
    pub working_days: WorkingDays,
    /// Maximum absences allowed.
    pub absence_limit: u32,
    /// Running absence count.
    pub absence_count: u32,
    /// Number of absence records in the ledger.
    pub recorded_absences: u32,
    /// Severity of the running count against the limit.
    pub severity: Severity,
    /// Alert to send, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertLevel>,
    /// True when the ledger holds more records than the limit allows.
    pub exceeded_limit: bool,
}

/// Computes the absence standing of a single intern.
///
/// Severity is based on the running count; `exceeded_limit` on the number
/// of recorded absences.
pub fn absence_standing(
    intern: &Intern,
    recorded_absences: u32,
    holidays: &HolidaySet,
) -> AbsenceStanding {
    let working_days = count_working_days(&intern.enrollment, holidays);
    let absence_limit = absence_limit_for_working_days(working_days.working_days);
    let severity = classify_severity(intern.absence_count, absence_limit);

    AbsenceStanding {
        intern_id: intern.id,
        name: intern.name.clone(),
        email: intern.email.clone(),
        project: intern.project.clone(),
        enrollment: intern.enrollment,
        working_days,
        absence_limit,
        absence_count: intern.absence_count,
        recorded_absences,
        severity,
        alert: alert_level(severity.percentage),
        exceeded_limit: recorded_absences > absence_limit,
    }
}

/// Computes the standing of every intern whose name contains `search`
/// (case-insensitive), most severe first. Ties keep ascending id order.
///
/// # Example
///
/// ```
/// use intern_attendance::config::ConfigLoader;
/// use intern_attendance::registry::InternshipRegistry;
/// use intern_attendance::reports::absence_overview;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let registry = InternshipRegistry::from_roster(loader.roster()).unwrap();
///
/// let overview = absence_overview(&registry, loader.holidays(), "");
/// assert_eq!(overview[0].name, "Ivy Lynn");
/// assert_eq!(overview[0].severity.percentage, 143);
/// ```
pub fn absence_overview(
    registry: &InternshipRegistry,
    holidays: &HolidaySet,
    search: &str,
) -> Vec<AbsenceStanding> {
    let term = search.trim().to_lowercase();

    let mut standings: Vec<AbsenceStanding> = registry
        .interns()
        .filter(|intern| term.is_empty() || intern.name.to_lowercase().contains(&term))
        .map(|intern| {
            let recorded = registry.absences_for(intern.id).len() as u32;
            absence_standing(intern, recorded, holidays)
        })
        .collect();

    standings.sort_by(|a, b| {
        b.severity
            .percentage
            .cmp(&a.severity.percentage)
            .then(a.intern_id.cmp(&b.intern_id))
    });
    standings
}
