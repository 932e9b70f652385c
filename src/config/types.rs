//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{AbsenceRecord, Holiday, HolidaySet, Intern, Project};

/// Metadata about the holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Human-readable name of the calendar.
    pub name: String,
    /// The region the holidays apply to.
    pub region: String,
}

/// Structure of `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Calendar metadata.
    pub calendar: CalendarMetadata,
    /// The holidays observed, in any order.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Structure of `roster.yaml`: the records used to seed the registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// Interns to register.
    #[serde(default)]
    pub interns: Vec<Intern>,
    /// Historical absence records.
    #[serde(default)]
    pub absences: Vec<AbsenceRecord>,
    /// Projects and their deliverables.
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    calendar: CalendarMetadata,
    holidays: HolidaySet,
    roster: RosterConfig,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(calendar: CalendarConfig, roster: RosterConfig) -> Self {
        Self {
            holidays: HolidaySet::new(calendar.holidays),
            calendar: calendar.calendar,
            roster,
        }
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        &self.calendar
    }

    /// Returns the holiday set built from the calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns the roster.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }
}
