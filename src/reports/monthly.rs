//! Month/year reports over the registry.
//!
//! Each report keeps only what is active during a [`CalendarWindow`],
//! using [`is_active_in_window`] for enrollments and
//! [`deliverable_in_window`] for deliverables.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DeliveryStatus, deliverable_in_window, delivery_status, is_active_in_window, unique_years,
};
use crate::models::{CalendarWindow, Deliverable, Intern, InternshipKind};
use crate::registry::InternshipRegistry;

/// Whether a project has delivered everything it owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Deliverable progress has reached 100%.
    Completed,
    /// Some deliverable is still outstanding, or the project has none.
    InProgress,
}

impl ProjectStatus {
    /// Classifies a progress percentage.
    pub fn from_progress(progress: Decimal) -> Self {
        if progress >= Decimal::ONE_HUNDRED {
            ProjectStatus::Completed
        } else {
            ProjectStatus::InProgress
        }
    }
}

/// Optional narrowing of [`project_activity`].
///
/// An unset field, or a blank department, keeps every project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Keep projects with at least one active intern from this department
    /// (case-insensitive).
    #[serde(default)]
    pub department: Option<String>,
    /// Keep projects in this status.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    /// Returns true if `activity` passes every set criterion.
    pub fn matches(&self, activity: &ProjectActivity) -> bool {
        let department_ok = match self.department.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(department) => activity
                .departments
                .iter()
                .any(|d| d.eq_ignore_ascii_case(department)),
        };
        let status_ok = self.status.is_none_or(|status| status == activity.status);
        department_ok && status_ok
    }
}

/// Active interns of one project during a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectActivity {
    /// Project name as referenced by the interns.
    pub project: String,
    /// Distinct company supervisors of the active interns.
    pub supervisors: BTreeSet<String>,
    /// Distinct groups of the active interns.
    pub groups: BTreeSet<String>,
    /// Distinct departments of the active interns.
    pub departments: BTreeSet<String>,
    /// Number of active interns on the project.
    pub intern_count: usize,
    /// Deliverable progress of the catalog project with the same name, zero
    /// when the catalog has none.
    pub progress: Decimal,
    /// Status derived from `progress`.
    pub status: ProjectStatus,
}

impl ProjectActivity {
    fn new(project: &str, progress: Decimal) -> Self {
        Self {
            project: project.to_string(),
            supervisors: BTreeSet::new(),
            groups: BTreeSet::new(),
            departments: BTreeSet::new(),
            intern_count: 0,
            progress,
            status: ProjectStatus::from_progress(progress),
        }
    }

    fn add(&mut self, intern: &Intern) {
        self.supervisors.insert(intern.company_supervisor.clone());
        if let Some(group) = &intern.group {
            self.groups.insert(group.clone());
        }
        if let Some(department) = &intern.department {
            self.departments.insert(department.clone());
        }
        self.intern_count += 1;
    }
}

/// Active interns and projects of one internship kind during a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipKindStats {
    /// The internship kind.
    pub kind: InternshipKind,
    /// Active interns of this kind.
    pub intern_count: usize,
    /// Distinct projects those interns work on.
    pub project_count: usize,
}

/// A deliverable with its delivery status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableLine {
    /// The deliverable.
    #[serde(flatten)]
    pub deliverable: Deliverable,
    /// Whether it is pending, on time or late.
    pub status: DeliveryStatus,
}

/// Deliverable progress of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableReport {
    /// Project name.
    pub project: String,
    /// Percentage of completed deliverables.
    pub progress: Decimal,
    /// Number of completed deliverables.
    pub completed: usize,
    /// Total number of deliverables.
    pub total: usize,
    /// Every deliverable of the project.
    pub deliverables: Vec<DeliverableLine>,
}

/// The monthly report: active interns and per-project activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The reporting window.
    pub window: CalendarWindow,
    /// Interns enrolled at some point during the window.
    pub active_interns: Vec<Intern>,
    /// Active interns grouped by project, sorted by project name.
    pub projects: Vec<ProjectActivity>,
    /// Active interns grouped by internship kind.
    pub internships: Vec<InternshipKindStats>,
    /// Years available for selection across the roster.
    pub available_years: Vec<i32>,
}

/// Returns the interns whose enrollment overlaps the window, in id order.
pub fn active_interns<'a>(
    registry: &'a InternshipRegistry,
    window: &CalendarWindow,
) -> Vec<&'a Intern> {
    registry
        .interns()
        .filter(|intern| is_active_in_window(&intern.enrollment, window))
        .collect()
}

/// Groups the active interns by project, sorted by project name, keeping
/// the projects that pass `filter`.
///
/// # Example
///
/// ```
/// use intern_attendance::config::ConfigLoader;
/// use intern_attendance::models::CalendarWindow;
/// use intern_attendance::registry::InternshipRegistry;
/// use intern_attendance::reports::{ProjectFilter, project_activity};
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let registry = InternshipRegistry::from_roster(loader.roster()).unwrap();
///
/// let filter = ProjectFilter {
///     department: Some("Data Science".to_string()),
///     status: None,
/// };
/// let june = CalendarWindow::new(6, 2024).unwrap();
/// assert_eq!(project_activity(&registry, &june, &filter).len(), 2);
/// ```
pub fn project_activity(
    registry: &InternshipRegistry,
    window: &CalendarWindow,
    filter: &ProjectFilter,
) -> Vec<ProjectActivity> {
    let mut by_project: BTreeMap<&str, ProjectActivity> = BTreeMap::new();

    for intern in active_interns(registry, window) {
        by_project
            .entry(intern.project.as_str())
            .or_insert_with(|| {
                ProjectActivity::new(&intern.project, catalog_progress(registry, &intern.project))
            })
            .add(intern);
    }

    by_project
        .into_values()
        .filter(|activity| filter.matches(activity))
        .collect()
}

fn catalog_progress(registry: &InternshipRegistry, project: &str) -> Decimal {
    registry
        .projects()
        .iter()
        .find(|p| p.name == project)
        .map(|p| p.progress())
        .unwrap_or(Decimal::ZERO)
}

/// Counts the active interns and their distinct projects per internship
/// kind. Kinds without an active intern are left out.
pub fn internship_stats(
    registry: &InternshipRegistry,
    window: &CalendarWindow,
) -> Vec<InternshipKindStats> {
    let mut by_kind: BTreeMap<InternshipKind, (usize, BTreeSet<&str>)> = BTreeMap::new();

    for intern in active_interns(registry, window) {
        let (count, projects) = by_kind.entry(intern.internship).or_default();
        *count += 1;
        projects.insert(intern.project.as_str());
    }

    by_kind
        .into_iter()
        .map(|(kind, (intern_count, projects))| InternshipKindStats {
            kind,
            intern_count,
            project_count: projects.len(),
        })
        .collect()
}

/// Builds the deliverable report for a window.
///
/// A catalog project is included when its name contains `search`
/// (case-insensitive) and either one of its deliverables falls due or was
/// delivered during the window, or an intern on the project is active
/// during the window.
///
/// # Example
///
/// ```
/// use intern_attendance::config::ConfigLoader;
/// use intern_attendance::models::CalendarWindow;
/// use intern_attendance::registry::InternshipRegistry;
/// use intern_attendance::reports::deliverables_in_window;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let registry = InternshipRegistry::from_roster(loader.roster()).unwrap();
///
/// let august = CalendarWindow::new(8, 2025).unwrap();
/// let report = deliverables_in_window(&registry, &august, "");
/// assert_eq!(report.len(), 3);
/// ```
pub fn deliverables_in_window(
    registry: &InternshipRegistry,
    window: &CalendarWindow,
    search: &str,
) -> Vec<DeliverableReport> {
    let term = search.trim().to_lowercase();
    let active_projects: BTreeSet<&str> = active_interns(registry, window)
        .into_iter()
        .map(|intern| intern.project.as_str())
        .collect();

    registry
        .projects()
        .iter()
        .filter(|project| term.is_empty() || project.name.to_lowercase().contains(&term))
        .filter(|project| {
            active_projects.contains(project.name.as_str())
                || project
                    .deliverables
                    .iter()
                    .any(|deliverable| deliverable_in_window(deliverable, window))
        })
        .map(|project| DeliverableReport {
            project: project.name.clone(),
            progress: project.progress(),
            completed: project.completed_count(),
            total: project.deliverables.len(),
            deliverables: project
                .deliverables
                .iter()
                .map(|deliverable| DeliverableLine {
                    status: delivery_status(deliverable.deadline, deliverable.delivery_date),
                    deliverable: deliverable.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Years in which any enrollment starts or ends.
pub fn report_years(registry: &InternshipRegistry) -> Vec<i32> {
    unique_years(registry.interns().map(|intern| &intern.enrollment))
}

/// Builds the full monthly report for a window. `filter` narrows the
/// project list only.
pub fn monthly_report(
    registry: &InternshipRegistry,
    window: CalendarWindow,
    filter: &ProjectFilter,
) -> MonthlyReport {
    MonthlyReport {
        active_interns: active_interns(registry, &window)
            .into_iter()
            .cloned()
            .collect(),
        projects: project_activity(registry, &window, filter),
        internships: internship_stats(registry, &window),
        available_years: report_years(registry),
        window,
    }
}
