//! Attendance and activity engine for internship management
//!
//! This crate counts the working days of an internship, derives the
//! absence allowance from them, classifies how much of it has been used,
//! and filters interns, projects and deliverables by month and year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod reports;
pub mod telemetry;
