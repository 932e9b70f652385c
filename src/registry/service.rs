//! The internship registry.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::RosterConfig;
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{AbsenceRecord, Intern, InternStatus, Project};

use super::InternFilter;

/// Owns the roster, the absence ledger and the project catalog.
///
/// Interns are keyed by id and iterate in ascending id order. Absence
/// records are kept in insertion order.
///
/// # Example
///
/// ```
/// use intern_attendance::models::{EnrollmentInterval, Intern, InternStatus, InternshipKind};
/// use intern_attendance::registry::InternshipRegistry;
/// use chrono::NaiveDate;
///
/// let mut registry = InternshipRegistry::new();
/// registry.add_intern(Intern {
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
/// }).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// registry.record_absence(1, date, "Illness").unwrap();
///
/// assert_eq!(registry.intern(1).unwrap().absence_count, 1);
/// assert_eq!(registry.absences_for(1).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InternshipRegistry {
    interns: BTreeMap<u32, Intern>,
    absences: Vec<AbsenceRecord>,
    projects: Vec<Project>,
}

impl InternshipRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a roster.
    ///
    /// Interns are validated as they are added. Absence records go through
    /// [`InternshipRegistry::import_absence`], so historical records dated
    /// outside an enrollment are kept with a warning.
    pub fn from_roster(roster: &RosterConfig) -> AttendanceResult<Self> {
        let mut registry = Self::new();

        for intern in &roster.interns {
            registry.add_intern(intern.clone())?;
        }
        for record in &roster.absences {
            registry.import_absence(record.clone())?;
        }
        for project in &roster.projects {
            registry.add_project(project.clone());
        }

        info!(
            interns = registry.interns.len(),
            absences = registry.absences.len(),
            projects = registry.projects.len(),
            "Registry seeded from roster"
        );

        Ok(registry)
    }

    /// Adds an intern after validating it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntern` if a required field is missing and
    /// `DuplicateIntern` if the id is already taken.
    pub fn add_intern(&mut self, intern: Intern) -> AttendanceResult<()> {
        intern.validate()?;

        if self.interns.contains_key(&intern.id) {
            return Err(AttendanceError::DuplicateIntern { id: intern.id });
        }

        debug!(intern_id = intern.id, name = %intern.name, "Intern added");
        self.interns.insert(intern.id, intern);
        Ok(())
    }

    /// Looks up an intern by id.
    pub fn intern(&self, id: u32) -> AttendanceResult<&Intern> {
        self.interns
            .get(&id)
            .ok_or(AttendanceError::InternNotFound { id })
    }

    /// Iterates over all interns in ascending id order.
    pub fn interns(&self) -> impl Iterator<Item = &Intern> {
        self.interns.values()
    }

    /// Number of registered interns.
    pub fn len(&self) -> usize {
        self.interns.len()
    }

    /// Returns true if no intern is registered.
    pub fn is_empty(&self) -> bool {
        self.interns.is_empty()
    }

    /// Removes an intern together with their absence records.
    pub fn remove_intern(&mut self, id: u32) -> AttendanceResult<Intern> {
        let intern = self
            .interns
            .remove(&id)
            .ok_or(AttendanceError::InternNotFound { id })?;

        self.absences.retain(|record| record.intern_id != id);

        info!(intern_id = id, "Intern removed");
        Ok(intern)
    }

    /// Changes the lifecycle status of an intern.
    pub fn update_status(&mut self, id: u32, status: InternStatus) -> AttendanceResult<()> {
        let intern = self
            .interns
            .get_mut(&id)
            .ok_or(AttendanceError::InternNotFound { id })?;

        intern.status = status;
        debug!(intern_id = id, status = ?status, "Intern status updated");
        Ok(())
    }

    /// Records a new absence and increments the intern's running count.
    ///
    /// # Errors
    ///
    /// - `InternNotFound` if the id is unknown
    /// - `InvalidAbsence` if the justification is blank
    /// - `AbsenceOutsideEnrollment` if the date is outside the intern's
    ///   enrollment interval
    pub fn record_absence(
        &mut self,
        intern_id: u32,
        date: NaiveDate,
        justification: &str,
    ) -> AttendanceResult<AbsenceRecord> {
        let intern = self
            .interns
            .get_mut(&intern_id)
            .ok_or(AttendanceError::InternNotFound { id: intern_id })?;

        if justification.trim().is_empty() {
            return Err(AttendanceError::InvalidAbsence {
                field: "justification".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if !intern.enrollment.contains(date) {
            return Err(AttendanceError::AbsenceOutsideEnrollment { intern_id, date });
        }

        intern.absence_count += 1;
        let record = AbsenceRecord::new(intern_id, date, justification.trim());
        self.absences.push(record.clone());

        info!(
            intern_id,
            date = %date,
            absence_count = intern.absence_count,
            "Absence recorded"
        );

        Ok(record)
    }

    /// Adds a historical absence record as-is.
    ///
    /// The running count is left untouched. A record dated outside the
    /// enrollment interval is kept and logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns `InternNotFound` if the record references an unknown intern.
    pub fn import_absence(&mut self, record: AbsenceRecord) -> AttendanceResult<()> {
        let intern = self.intern(record.intern_id)?;

        if !intern.enrollment.contains(record.date) {
            warn!(
                intern_id = record.intern_id,
                date = %record.date,
                enrollment = %intern.enrollment,
                "Imported absence is outside the enrollment interval"
            );
        }

        self.absences.push(record);
        Ok(())
    }

    /// Returns the absence records of an intern sorted by date.
    pub fn absences_for(&self, intern_id: u32) -> Vec<&AbsenceRecord> {
        let mut records: Vec<&AbsenceRecord> = self
            .absences
            .iter()
            .filter(|record| record.intern_id == intern_id)
            .collect();
        records.sort_by_key(|record| record.date);
        records
    }

    /// Returns the interns matching the filter, in ascending id order.
    pub fn filter_interns(&self, filter: &InternFilter) -> Vec<&Intern> {
        self.interns().filter(|intern| filter.matches(intern)).collect()
    }

    /// Adds a project to the catalog, replacing any project with the same
    /// name.
    pub fn add_project(&mut self, project: Project) {
        match self.projects.iter_mut().find(|p| p.name == project.name) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
    }

    /// Returns the project catalog in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Deliverable, EnrollmentInterval, InternshipKind};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_intern(id: u32, name: &str, project: &str) -> Intern {
        Intern {
            id,
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            internship: InternshipKind::Pfa,
            status: InternStatus::Confirmed,
            company_supervisor: "John Manager".to_string(),
            project: project.to_string(),
            group: None,
            department: None,
            enrollment: EnrollmentInterval::parse("2024-01-15", "2024-06-15").unwrap(),
            absence_count: 0,
        }
    }

    fn sample_registry() -> InternshipRegistry {
        let mut registry = InternshipRegistry::new();
        registry
            .add_intern(make_intern(1, "Alice Johnson", "Mobile Application Development"))
            .unwrap();
        registry
            .add_intern(make_intern(2, "Bob Chen", "AI Research"))
            .unwrap();
        registry
    }

    #[test]
    fn test_add_and_lookup_intern() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.intern(1).unwrap().name, "Alice Johnson");
    }

    #[test]
    fn test_unknown_intern_not_found() {
        let registry = sample_registry();
        assert!(matches!(
            registry.intern(99),
            Err(AttendanceError::InternNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_duplicate_intern_rejected() {
        let mut registry = sample_registry();
        let result = registry.add_intern(make_intern(1, "Someone Else", "Elsewhere"));
        assert!(matches!(
            result,
            Err(AttendanceError::DuplicateIntern { id: 1 })
        ));
        assert_eq!(registry.intern(1).unwrap().name, "Alice Johnson");
    }

    #[test]
    fn test_invalid_intern_rejected() {
        let mut registry = InternshipRegistry::new();
        let mut intern = make_intern(3, "Charlie Brown", "Big Data Analysis");
        intern.company_supervisor = "  ".to_string();

        match registry.add_intern(intern) {
            Err(AttendanceError::InvalidIntern { field, .. }) => {
                assert_eq!(field, "company_supervisor");
            }
            other => panic!("Expected InvalidIntern, got {:?}", other),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_interns_iterate_in_id_order() {
        let mut registry = InternshipRegistry::new();
        registry.add_intern(make_intern(5, "Eve Adams", "P")).unwrap();
        registry.add_intern(make_intern(2, "Bob Chen", "P")).unwrap();
        registry.add_intern(make_intern(9, "Ivy Lynn", "P")).unwrap();

        let ids: Vec<u32> = registry.interns().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_record_absence_increments_count() {
        let mut registry = sample_registry();
        let record = registry
            .record_absence(1, make_date("2024-03-11"), "  Illness ")
            .unwrap();

        assert_eq!(record.intern_id, 1);
        assert_eq!(record.justification, "Illness");
        assert_eq!(registry.intern(1).unwrap().absence_count, 1);
        assert_eq!(registry.absences_for(1), vec![&record]);
    }

    #[test]
    fn test_record_absence_outside_enrollment_rejected() {
        let mut registry = sample_registry();
        let result = registry.record_absence(1, make_date("2024-06-16"), "Illness");

        assert!(matches!(
            result,
            Err(AttendanceError::AbsenceOutsideEnrollment { intern_id: 1, .. })
        ));
        assert_eq!(registry.intern(1).unwrap().absence_count, 0);
        assert!(registry.absences_for(1).is_empty());
    }

    #[test]
    fn test_record_absence_on_enrollment_boundaries() {
        let mut registry = sample_registry();
        assert!(registry.record_absence(1, make_date("2024-01-15"), "First day").is_ok());
        assert!(registry.record_absence(1, make_date("2024-06-15"), "Last day").is_ok());
        assert_eq!(registry.intern(1).unwrap().absence_count, 2);
    }

    #[test]
    fn test_record_absence_requires_justification() {
        let mut registry = sample_registry();
        let result = registry.record_absence(1, make_date("2024-03-11"), "   ");
        assert!(matches!(
            result,
            Err(AttendanceError::InvalidAbsence { .. })
        ));
    }

    #[test]
    fn test_record_absence_unknown_intern() {
        let mut registry = sample_registry();
        let result = registry.record_absence(42, make_date("2024-03-11"), "Illness");
        assert!(matches!(
            result,
            Err(AttendanceError::InternNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_import_absence_is_lenient_and_keeps_count() {
        let mut registry = sample_registry();
        let outside = AbsenceRecord::new(1, make_date("2023-12-01"), "Before start");

        registry.import_absence(outside.clone()).unwrap();

        assert_eq!(registry.absences_for(1), vec![&outside]);
        assert_eq!(registry.intern(1).unwrap().absence_count, 0);
    }

    #[test]
    fn test_import_absence_unknown_intern() {
        let mut registry = sample_registry();
        let record = AbsenceRecord::new(7, make_date("2024-03-11"), "Illness");
        assert!(registry.import_absence(record).is_err());
    }

    #[test]
    fn test_absences_for_sorted_by_date() {
        let mut registry = sample_registry();
        registry
            .import_absence(AbsenceRecord::new(1, make_date("2024-03-11"), "B"))
            .unwrap();
        registry
            .import_absence(AbsenceRecord::new(2, make_date("2024-02-01"), "Other"))
            .unwrap();
        registry
            .import_absence(AbsenceRecord::new(1, make_date("2024-03-10"), "A"))
            .unwrap();

        let dates: Vec<NaiveDate> = registry.absences_for(1).iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![make_date("2024-03-10"), make_date("2024-03-11")]);
    }

    #[test]
    fn test_remove_intern_drops_their_absences() {
        let mut registry = sample_registry();
        registry
            .record_absence(1, make_date("2024-03-11"), "Illness")
            .unwrap();
        registry
            .record_absence(2, make_date("2024-03-11"), "Illness")
            .unwrap();

        let removed = registry.remove_intern(1).unwrap();

        assert_eq!(removed.id, 1);
        assert!(registry.intern(1).is_err());
        assert!(registry.absences_for(1).is_empty());
        assert_eq!(registry.absences_for(2).len(), 1);
        assert!(registry.remove_intern(1).is_err());
    }

    #[test]
    fn test_update_status() {
        let mut registry = sample_registry();
        registry.update_status(2, InternStatus::Completed).unwrap();
        assert_eq!(registry.intern(2).unwrap().status, InternStatus::Completed);
        assert!(registry.update_status(3, InternStatus::Completed).is_err());
    }

    #[test]
    fn test_filter_interns() {
        let mut registry = sample_registry();
        registry.update_status(2, InternStatus::Unconfirmed).unwrap();

        let all = registry.filter_interns(&InternFilter::default());
        assert_eq!(all.len(), 2);

        let by_search = registry.filter_interns(&InternFilter {
            search: Some("MOBILE".to_string()),
            ..Default::default()
        });
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id, 1);

        let by_status = registry.filter_interns(&InternFilter {
            status: Some(InternStatus::Unconfirmed),
            ..Default::default()
        });
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, 2);

        let by_project = registry.filter_interns(&InternFilter {
            project: Some("AI Research".to_string()),
            status: Some(InternStatus::Confirmed),
            ..Default::default()
        });
        assert!(by_project.is_empty());
    }

    #[test]
    fn test_add_project_replaces_same_name() {
        let mut registry = InternshipRegistry::new();
        registry.add_project(Project {
            name: "Alpha".to_string(),
            deliverables: vec![],
        });
        registry.add_project(Project {
            name: "Alpha".to_string(),
            deliverables: vec![Deliverable {
                id: 1,
                label: "Report".to_string(),
                deadline: make_date("2025-08-15"),
                is_completed: false,
                delivery_date: None,
            }],
        });

        assert_eq!(registry.projects().len(), 1);
        assert_eq!(registry.projects()[0].deliverables.len(), 1);
    }

    #[test]
    fn test_from_roster_fixture() {
        let loader = crate::config::ConfigLoader::load("./config/default").unwrap();
        let registry = InternshipRegistry::from_roster(loader.roster()).unwrap();

        assert_eq!(registry.len(), 10);
        assert_eq!(registry.absences_for(5).len(), 3);
        assert_eq!(registry.absences_for(1).len(), 2);
        assert!(registry.absences_for(2).is_empty());
        assert_eq!(registry.projects().len(), 6);
        // Imported records leave the running count alone.
        assert_eq!(registry.intern(5).unwrap().absence_count, 3);
        assert_eq!(registry.intern(1).unwrap().absence_count, 28);
    }
}
