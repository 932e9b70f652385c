//! In-memory registry of interns, absences and projects.
//!
//! The registry is the single owner of mutable roster state. Callers that
//! need shared access wrap it in a lock (see [`crate::api::AppState`]).

mod filter;
mod service;

pub use filter::InternFilter;
pub use service::InternshipRegistry;
