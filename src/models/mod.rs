//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod calendar_window;
mod enrollment;
mod holiday;
mod intern;
mod project;

pub use absence::{AbsenceRecord, AbsenceStatus};
pub use calendar_window::CalendarWindow;
pub use enrollment::{DATE_FORMAT, EnrollmentInterval, parse_date};
pub use holiday::{Holiday, HolidaySet};
pub use intern::{Intern, InternStatus, InternshipKind};
pub use project::{Deliverable, Project};
