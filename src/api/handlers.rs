//! HTTP request handlers for the care payments API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payment_breakdown, summarize_by_worker};

use super::request::{CalculationRequest, SummaryRequest, validate_entries};
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payments/calculate", post(calculate_handler))
        .route("/payments/summary", post(summary_handler))
        .route("/config/commission", get(commission_handler))
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

fn error_response(error: ApiErrorResponse) -> Response {
    error.into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

/// Handler for POST /payments/calculate.
///
/// Computes one worker's payment breakdown from their work-log entries.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payment calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_entries(&request.entries) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected work log entries"
        );
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let breakdown = compute_payment_breakdown(
        &request.worker_id,
        &request.entries,
        state.config().commission(),
    );

    info!(
        correlation_id = %correlation_id,
        worker_id = %request.worker_id,
        entries_count = request.entries.len(),
        net_amount = %breakdown.summary.net_amount,
        warnings = breakdown.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Payment calculation completed"
    );

    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /payments/summary.
///
/// Computes per-worker summaries for entries spanning many workers.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payment summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_entries(&request.entries) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected work log entries"
        );
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let workers = summarize_by_worker(&request.entries, state.config().commission());

    info!(
        correlation_id = %correlation_id,
        entries_count = request.entries.len(),
        workers_count = workers.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Payment summary completed"
    );

    json_response(StatusCode::OK, SummaryResponse { workers })
}

/// Handler for GET /config/commission.
async fn commission_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().commission())
}
