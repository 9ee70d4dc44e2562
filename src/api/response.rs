//! Response types for the ROI calculator API.
//!
//! This module defines the success envelopes, the error response
//! structure, and the mapping from validation errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{Calculation, format_assumptions, format_result};
use crate::error::ValidationError;
use crate::models::{
    AssumptionRecord, Currency, FormattedAssumptions, FormattedResult, Region, RoiResult, Sector,
    ValidatedInput,
};

/// Successful response from `/calculate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Identifier for this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// Version of this crate.
    pub engine_version: String,
    /// Version label of the reference data used.
    pub reference_data_version: String,
    /// Currency of all monetary fields.
    pub currency: Currency,
    /// The validated input.
    pub input: ValidatedInput,
    /// The unrounded result.
    pub result: RoiResult,
    /// The result rendered for display.
    pub formatted: FormattedResult,
}

impl CalculationResponse {
    /// Wraps a completed calculation.
    pub fn new(
        calculation_id: Uuid,
        calculation: &Calculation,
        reference_data_version: &str,
    ) -> Self {
        let region = calculation.input.region();
        Self {
            calculation_id,
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            reference_data_version: reference_data_version.to_string(),
            currency: region.currency(),
            input: calculation.input,
            result: calculation.result,
            formatted: format_result(&calculation.result, region),
        }
    }
}

/// One entry of a batch response: either a calculation or an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchItem {
    /// The input was valid.
    Ok(Box<CalculationResponse>),
    /// The input was rejected.
    Error(ApiError),
}

/// Successful response from `/calculate/batch`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCalculationResponse {
    /// One item per input, in request order.
    pub results: Vec<BatchItem>,
    /// Number of inputs that calculated successfully.
    pub succeeded: usize,
    /// Number of inputs that were rejected.
    pub failed: usize,
}

/// The industry averages for one (sector, region) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionsResponse {
    /// The sector.
    pub sector: Sector,
    /// The region.
    pub region: Region,
    /// Currency of all monetary fields.
    pub currency: Currency,
    /// The raw per-employee figures.
    pub assumptions: AssumptionRecord,
    /// The same figures rendered for display.
    pub formatted: FormattedAssumptions,
}

impl AssumptionsResponse {
    /// Builds the response for one cell.
    pub fn new(sector: Sector, region: Region, assumptions: &AssumptionRecord) -> Self {
        Self {
            sector,
            region,
            currency: region.currency(),
            assumptions: *assumptions,
            formatted: format_assumptions(assumptions, region),
        }
    }
}

/// The full reference table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataResponse {
    /// Version label of the reference data.
    pub version: String,
    /// Every cell in sector, then region, order.
    pub entries: Vec<AssumptionsResponse>,
}

/// Response from `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Version of this crate.
    pub engine_version: String,
    /// Version label of the reference data.
    pub reference_data_version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

impl From<&ValidationError> for ApiError {
    fn from(error: &ValidationError) -> Self {
        let message = error.to_string();
        match error {
            ValidationError::MissingField { field } => ApiError::with_details(
                "MISSING_FIELD",
                message,
                format!("Required field '{}' was not provided", field),
            ),
            ValidationError::NotANumber { field, .. } => ApiError::with_details(
                "NOT_A_NUMBER",
                message,
                format!("Field '{}' must be a finite number", field),
            ),
            ValidationError::OutOfRange { field, bounds, .. } => ApiError::with_details(
                "OUT_OF_RANGE",
                message,
                format!("Field '{}' must be {}", field, bounds),
            ),
            ValidationError::UnknownEnumMember { field, .. } => ApiError::with_details(
                "UNKNOWN_ENUM_MEMBER",
                message,
                format!("Field '{}' must be one of: {}", field, allowed_values(field)),
            ),
        }
    }
}

fn allowed_values(field: &str) -> String {
    let names: Vec<&str> = match field {
        "sector" => Sector::ALL.iter().map(|s| s.as_str()).collect(),
        _ => Region::ALL.iter().map(|r| r.as_str()).collect(),
    };
    names.join(", ")
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::from(&error),
        }
    }
}
