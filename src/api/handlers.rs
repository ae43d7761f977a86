//! HTTP request handlers for the employer cost API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_cost_traced;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{CalculationResult, PeriodBreakdown};
use crate::report::render_document;

use super::request::CostRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, CatalogResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/catalog", get(catalog_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a cost request and returns the calculation result with its
/// breakdown tables and chart.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_calculation(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                contribution_group = request.contribution_group,
                total_employer_cost = %result.summary.total_employer_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::new(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /report endpoint.
///
/// Accepts the same body as `/calculate` and returns the plain-text document.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    match perform_calculation(&request, config) {
        Ok(result) => {
            let document = render_document(
                &result.summary,
                result.per_period.number_of_payments,
                config.metadata(),
            );
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                "Report rendered"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                document,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /catalog endpoint.
///
/// Lists the loaded rate table, its contribution groups and the economic
/// activities callers can select.
async fn catalog_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CatalogResponse::from_config(state.config())),
    )
        .into_response()
}

/// Resolves the request and runs the engine.
fn perform_calculation(
    request: &CostRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let resolved = request.resolve(config)?;
    let calculation = compute_cost_traced(&resolved.input, config.table())?;
    let per_period = PeriodBreakdown::new(&calculation.summary, resolved.schedule);

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_table_version: config.metadata().version.clone(),
        summary: calculation.summary,
        per_period,
        audit_trace: calculation.audit_trace,
    })
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
