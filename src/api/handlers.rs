//! HTTP request handlers for the attendance API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    absence_limit_for_working_days, alert_level, classify_severity, count_working_days,
    is_active_in_window,
};
use crate::error::AttendanceError;
use crate::models::{AbsenceRecord, parse_date};
use crate::reports::{
    absence_overview, absence_standing, dashboard_summary, deliverables_in_window, monthly_report,
};

use super::request::{
    AbsenceLimitRequest, ActivityRequest, RecordAbsenceRequest, SearchQuery, WindowQuery,
};
use super::response::{
    AbsenceLimitResponse, ActivityResponse, ApiError, ApiErrorResponse, InternAbsencesResponse,
    RecordAbsenceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/absence-limit", post(absence_limit_handler))
        .route("/activity", post(activity_handler))
        .route("/interns/absences", get(absence_overview_handler))
        .route(
            "/interns/:id/absences",
            get(intern_absences_handler).post(record_absence_handler),
        )
        .route("/reports/monthly", get(monthly_report_handler))
        .route("/reports/summary", get(summary_handler))
        .route("/reports/deliverables", get(deliverables_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: AttendanceError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    json_response(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(body_text),
    )
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Path parameter rejected"
    );
    json_response(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(body_text),
    )
}

/// Handler for POST /absence-limit.
///
/// Computes the working days, absence limit and severity for an arbitrary
/// interval. Uses the configured holidays unless the request lists its own.
async fn absence_limit_handler(
    State(state): State<AppState>,
    payload: Result<Json<AbsenceLimitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence limit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let interval = match request.interval() {
        Ok(interval) => interval,
        Err(err) => return error_response(correlation_id, err),
    };
    let holiday_override = match request.holiday_override() {
        Ok(holidays) => holidays,
        Err(err) => return error_response(correlation_id, err),
    };
    let holidays = holiday_override.as_ref().unwrap_or(state.holidays());

    let working_days = count_working_days(&interval, holidays);
    let absence_limit = absence_limit_for_working_days(working_days.working_days);
    let severity = classify_severity(request.absences, absence_limit);

    info!(
        correlation_id = %correlation_id,
        interval = %interval,
        working_days = working_days.working_days,
        absence_limit,
        percentage = severity.percentage,
        tier = %severity.tier,
        "Absence limit computed"
    );

    json_response(
        StatusCode::OK,
        AbsenceLimitResponse {
            interval,
            working_days,
            absence_limit,
            alert: alert_level(severity.percentage),
            severity,
        },
    )
}

/// Handler for POST /activity.
///
/// Tells whether an interval overlaps a month/year window.
async fn activity_handler(payload: Result<Json<ActivityRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing activity request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let (interval, window) = match request.parse() {
        Ok(parsed) => parsed,
        Err(err) => return error_response(correlation_id, err),
    };

    let active = is_active_in_window(&interval, &window);
    info!(
        correlation_id = %correlation_id,
        interval = %interval,
        window = %window,
        active,
        "Activity computed"
    );

    json_response(
        StatusCode::OK,
        ActivityResponse {
            active,
            window_start: window.first_day(),
            window_end: window.last_day(),
        },
    )
}

/// Handler for GET /interns/absences.
///
/// Returns every intern's absence standing, most severe first.
async fn absence_overview_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let search = query.search.unwrap_or_default();

    let registry = state.registry().read().await;
    let overview = absence_overview(&registry, state.holidays(), &search);

    info!(
        correlation_id = %correlation_id,
        search = %search,
        interns = overview.len(),
        "Absence overview served"
    );
    json_response(StatusCode::OK, overview)
}

/// Handler for GET /interns/{id}/absences.
async fn intern_absences_handler(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };

    let registry = state.registry().read().await;
    let intern = match registry.intern(id) {
        Ok(intern) => intern,
        Err(err) => return error_response(correlation_id, err),
    };

    let absences: Vec<AbsenceRecord> = registry.absences_for(id).into_iter().cloned().collect();
    let standing = absence_standing(intern, absences.len() as u32, state.holidays());

    info!(
        correlation_id = %correlation_id,
        intern_id = id,
        absences = absences.len(),
        "Intern absences served"
    );
    json_response(
        StatusCode::OK,
        InternAbsencesResponse { standing, absences },
    )
}

/// Handler for POST /interns/{id}/absences.
///
/// Records an absence within the intern's enrollment and returns the
/// created record with the updated standing.
async fn record_absence_handler(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    payload: Result<Json<RecordAbsenceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence recording request");

    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    let date = match parse_date(&request.date) {
        Ok(date) => date,
        Err(err) => return error_response(correlation_id, err),
    };

    let mut registry = state.registry().write().await;
    let absence = match registry.record_absence(id, date, &request.justification) {
        Ok(record) => record,
        Err(err) => return error_response(correlation_id, err),
    };

    let recorded = registry.absences_for(id).len() as u32;
    let standing = match registry.intern(id) {
        Ok(intern) => absence_standing(intern, recorded, state.holidays()),
        Err(err) => return error_response(correlation_id, err),
    };

    if let Some(alert) = standing.alert {
        warn!(
            correlation_id = %correlation_id,
            intern_id = id,
            email = %standing.email,
            percentage = standing.severity.percentage,
            alert = alert.subject(),
            "Absence alert raised"
        );
    }

    json_response(
        StatusCode::CREATED,
        RecordAbsenceResponse { absence, standing },
    )
}

/// Handler for GET /reports/monthly.
async fn monthly_report_handler(
    State(state): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let window = match query.window() {
        Ok(window) => window,
        Err(err) => return error_response(correlation_id, err),
    };

    let filter = query.project_filter();

    let registry = state.registry().read().await;
    let report = monthly_report(&registry, window, &filter);

    info!(
        correlation_id = %correlation_id,
        window = %window,
        department = ?filter.department,
        status = ?filter.status,
        active_interns = report.active_interns.len(),
        projects = report.projects.len(),
        "Monthly report served"
    );
    json_response(StatusCode::OK, report)
}

/// Handler for GET /reports/summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let registry = state.registry().read().await;
    let summary = dashboard_summary(&registry);

    info!(
        correlation_id = %correlation_id,
        total_interns = summary.total_interns,
        outstanding_deliverables = summary.outstanding_deliverables,
        "Dashboard summary served"
    );
    json_response(StatusCode::OK, summary)
}

/// Handler for GET /reports/deliverables.
async fn deliverables_handler(
    State(state): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let window = match query.window() {
        Ok(window) => window,
        Err(err) => return error_response(correlation_id, err),
    };
    let search = query.search.unwrap_or_default();

    let registry = state.registry().read().await;
    let report = deliverables_in_window(&registry, &window, &search);

    info!(
        correlation_id = %correlation_id,
        window = %window,
        search = %search,
        projects = report.len(),
        "Deliverable report served"
    );
    json_response(StatusCode::OK, report)
}
