//! HTTP API module for the attendance engine.
//!
//! This module provides the REST API endpoints for absence limits,
//! activity checks, the absence ledger and the monthly reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbsenceLimitRequest, ActivityRequest, RecordAbsenceRequest, SearchQuery, WindowQuery,
};
pub use response::{
    AbsenceLimitResponse, ActivityResponse, ApiError, ApiErrorResponse, InternAbsencesResponse,
    RecordAbsenceResponse,
};
pub use state::AppState;
