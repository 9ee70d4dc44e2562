//! HTTP request handlers for the ROI calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, calculate_batch};
use crate::error::ValidationError;
use crate::models::{Region, Sector};

use super::request::{BatchCalculationRequest, CalculationRequest, MAX_BATCH_SIZE};
use super::response::{
    ApiError, ApiErrorResponse, AssumptionsResponse, BatchCalculationResponse, BatchItem,
    CalculationResponse, HealthResponse, ReferenceDataResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(batch_handler))
        .route("/assumptions/:sector/:region", get(assumptions_handler))
        .route("/reference-data", get(reference_data_handler))
        .route("/health", get(health_handler))
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

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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

/// Handler for POST /calculate.
///
/// Validates the input, computes the ROI against the loaded reference
/// table, and returns the result with its formatted rendering.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let raw = match payload {
        Ok(Json(raw)) => raw,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate(&raw, state.table()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                sector = %calculation.input.sector(),
                region = %calculation.input.region(),
                employees_to_reskill = calculation.result.employees_to_reskill,
                roi_defined = calculation.result.roi_percent.is_some(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let response =
                CalculationResponse::new(correlation_id, &calculation, state.table().version());
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                field = err.field(),
                error = %err,
                "Input rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /calculate/batch.
///
/// Each input is calculated independently; rejected inputs are reported
/// in place without failing the batch.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.inputs.len() > MAX_BATCH_SIZE {
        warn!(
            correlation_id = %correlation_id,
            batch_size = request.inputs.len(),
            "Batch too large"
        );
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "BATCH_TOO_LARGE",
                format!("Batch of {} inputs is too large", request.inputs.len()),
                format!("At most {} inputs are accepted per request", MAX_BATCH_SIZE),
            ),
        );
    }

    let start_time = Instant::now();
    let table = state.table();
    let results: Vec<BatchItem> = calculate_batch(&request.inputs, table)
        .into_iter()
        .map(|outcome| match outcome {
            Ok(calculation) => BatchItem::Ok(Box::new(CalculationResponse::new(
                Uuid::new_v4(),
                &calculation,
                table.version(),
            ))),
            Err(err) => BatchItem::Error(ApiError::from(&err)),
        })
        .collect();

    let succeeded = results
        .iter()
        .filter(|item| matches!(item, BatchItem::Ok(_)))
        .count();
    let failed = results.len() - succeeded;

    info!(
        correlation_id = %correlation_id,
        succeeded,
        failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch calculation completed"
    );

    json_response(
        StatusCode::OK,
        BatchCalculationResponse {
            results,
            succeeded,
            failed,
        },
    )
}

/// Handler for GET /assumptions/{sector}/{region}.
///
/// Returns the per-employee industry averages for one cell.
async fn assumptions_handler(
    State(state): State<AppState>,
    Path((sector, region)): Path<(String, String)>,
) -> Response {
    let parsed: Result<(Sector, Region), ValidationError> = sector
        .parse::<Sector>()
        .and_then(|s| region.parse::<Region>().map(|r| (s, r)));

    match parsed {
        Ok((sector, region)) => {
            let assumptions = state.table().assumptions(sector, region);
            json_response(
                StatusCode::OK,
                AssumptionsResponse::new(sector, region, assumptions),
            )
        }
        Err(err) => {
            warn!(error = %err, "Unknown assumptions cell requested");
            error_response(err)
        }
    }
}

/// Handler for GET /reference-data.
async fn reference_data_handler(State(state): State<AppState>) -> Response {
    let table = state.table();
    let entries = table
        .iter()
        .map(|(sector, region, record)| AssumptionsResponse::new(sector, region, record))
        .collect();

    json_response(
        StatusCode::OK,
        ReferenceDataResponse {
            version: table.version().to_string(),
            entries,
        },
    )
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            reference_data_version: state.table().version().to_string(),
        },
    )
}
