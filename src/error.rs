//! Error types for the reskilling ROI calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`ValidationError`] covers rejected user input; [`EngineError`] wraps it
//! together with reference-data loading failures.

use thiserror::Error;

use crate::models::{Region, Sector};

/// Why a raw input was rejected.
///
/// # Example
///
/// ```
/// use reskilling_roi::error::ValidationError;
///
/// let error = ValidationError::UnknownEnumMember {
///     field: "region",
///     value: "US".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown value for 'region': US");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was absent or empty.
    #[error("Missing field: {field}")]
    MissingField {
        /// The field name.
        field: &'static str,
    },

    /// A numeric field could not be parsed as a finite number.
    #[error("Field '{field}' is not a number: {raw}")]
    NotANumber {
        /// The field name.
        field: &'static str,
        /// The raw text that failed to parse.
        raw: String,
    },

    /// A numeric field was outside its allowed interval.
    #[error("Field '{field}' is out of range: {value} (expected {bounds})")]
    OutOfRange {
        /// The field name.
        field: &'static str,
        /// The offending value.
        value: f64,
        /// A description of the allowed interval.
        bounds: &'static str,
    },

    /// A sector or region was not recognised.
    #[error("Unknown value for '{field}': {value}")]
    UnknownEnumMember {
        /// The field name.
        field: &'static str,
        /// The unrecognised value.
        value: String,
    },
}

impl ValidationError {
    /// Allowed interval for `totalEmployees`.
    pub const EMPLOYEE_BOUNDS: &'static str = "a whole number from 0 to 9007199254740992";

    /// Allowed interval for `reskillingPercentage`.
    pub const PERCENT_BOUNDS: &'static str = "0 to 100";

    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::UnknownEnumMember { field, .. } => *field,
        }
    }
}

/// The main error type for the calculator.
///
/// # Example
///
/// ```
/// use reskilling_roi::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/reference_data.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Reference data file not found: /missing/reference_data.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reference data file was not found at the specified path.
    #[error("Reference data file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Reference data file could not be parsed.
    #[error("Failed to parse reference data '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A (sector, region) cell has no assumptions in the reference data.
    #[error("No assumptions for sector '{sector}' in region '{region}'")]
    MissingAssumption {
        /// The sector of the missing cell.
        sector: Sector,
        /// The region of the missing cell.
        region: Region,
    },

    /// A (sector, region) cell was listed more than once.
    #[error("Duplicate assumptions for sector '{sector}' in region '{region}'")]
    DuplicateAssumption {
        /// The sector of the duplicated cell.
        sector: Sector,
        /// The region of the duplicated cell.
        region: Region,
    },

    /// A (sector, region) cell holds values outside their allowed ranges.
    #[error("Invalid assumptions for sector '{sector}' in region '{region}': {message}")]
    InvalidAssumption {
        /// The sector of the invalid cell.
        sector: Sector,
        /// The region of the invalid cell.
        region: Region,
        /// What was wrong with it.
        message: String,
    },

    /// User input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
