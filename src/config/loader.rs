//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar and roster from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::HolidaySet;

use super::types::{AttendanceConfig, CalendarConfig, CalendarMetadata, RosterConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml   # Calendar metadata and holidays
/// └── roster.yaml     # Interns, absence records and projects
/// ```
///
/// # Example
///
/// ```no_run
/// use intern_attendance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Calendar: {}", loader.calendar().name);
/// println!("Holidays: {}", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calendar.yaml` or `roster.yaml` is missing
    /// - Either file contains invalid YAML or invalid records (for example an
    ///   enrollment that ends before it starts)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use intern_attendance::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), intern_attendance::error::AttendanceError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> AttendanceResult<Self> {
        let path = path.as_ref();

        let calendar = Self::load_yaml::<CalendarConfig>(&path.join("calendar.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        Ok(Self {
            config: AttendanceConfig::new(calendar, roster),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AttendanceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AttendanceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AttendanceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        self.config.calendar()
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &HolidaySet {
        self.config.holidays()
    }

    /// Returns the roster used to seed the registry.
    pub fn roster(&self) -> &RosterConfig {
        self.config.roster()
    }
}
