//! Configuration loading and management for the attendance engine.
//!
//! This module loads the holiday calendar and the roster fixtures from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use intern_attendance::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, CalendarConfig, CalendarMetadata, RosterConfig};
