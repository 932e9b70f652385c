//! Application state for the attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::AttendanceResult;
use crate::models::HolidaySet;
use crate::registry::InternshipRegistry;

/// Shared application state.
///
/// Holds the registry behind a read-write lock, since absences can be
/// recorded while reports are served, and the holiday calendar.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<InternshipRegistry>>,
    holidays: Arc<HolidaySet>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(registry: InternshipRegistry, holidays: HolidaySet) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            holidays: Arc::new(holidays),
        }
    }

    /// Creates the application state from loaded configuration, seeding the
    /// registry from the roster.
    pub fn from_config(config: &ConfigLoader) -> AttendanceResult<Self> {
        let registry = InternshipRegistry::from_roster(config.roster())?;
        Ok(Self::new(registry, config.holidays().clone()))
    }

    /// Returns the shared registry.
    pub fn registry(&self) -> &RwLock<InternshipRegistry> {
        &self.registry
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}
