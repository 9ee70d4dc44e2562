//! Raw and validated calculator inputs.
//!
//! [`RawInput`] is what the presentation layer hands over: every field is
//! optional and may be a JSON number or a form string. [`ValidatedInput`]
//! can only be built through range-checked constructors, so downstream
//! code never re-parses or re-checks.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{Region, Sector};

/// Largest employee count accepted; integers above this are not exactly
/// representable as `f64`.
pub const MAX_TOTAL_EMPLOYEES: u64 = 1 << 53;

/// A single raw field value as submitted by a form or API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// A JSON number.
    Number(f64),
    /// A string, typically straight from a form input.
    Text(String),
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<u64> for RawField {
    fn from(value: u64) -> Self {
        RawField::Number(value as f64)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

/// Unvalidated calculator input.
///
/// # Example
///
/// ```
/// use reskilling_roi::models::RawInput;
///
/// let raw: RawInput = serde_json::from_str(
///     r#"{"totalEmployees": "1000", "reskillingPercentage": 40, "sector": "banking", "region": "UK"}"#,
/// ).unwrap();
/// assert!(raw.total_employees.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    /// Total headcount.
    #[serde(default)]
    pub total_employees: Option<RawField>,
    /// Share of the headcount to reskill, 0–100.
    #[serde(default)]
    pub reskilling_percentage: Option<RawField>,
    /// Sector wire name.
    #[serde(default)]
    pub sector: Option<RawField>,
    /// Region wire name.
    #[serde(default)]
    pub region: Option<RawField>,
}

impl RawInput {
    /// Builds a raw input with every field present.
    pub fn new(
        total_employees: impl Into<RawField>,
        reskilling_percentage: impl Into<RawField>,
        sector: impl Into<RawField>,
        region: impl Into<RawField>,
    ) -> Self {
        Self {
            total_employees: Some(total_employees.into()),
            reskilling_percentage: Some(reskilling_percentage.into()),
            sector: Some(sector.into()),
            region: Some(region.into()),
        }
    }
}

/// Calculator input that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInput {
    total_employees: u64,
    reskilling_percentage: f64,
    sector: Sector,
    region: Region,
}

impl ValidatedInput {
    /// Builds a validated input, checking numeric ranges.
    ///
    /// # Example
    ///
    /// ```
    /// use reskilling_roi::models::{Region, Sector, ValidatedInput};
    ///
    /// let input = ValidatedInput::new(1000, 40.0, Sector::Banking, Region::UnitedKingdom).unwrap();
    /// assert_eq!(input.total_employees(), 1000);
    ///
    /// assert!(ValidatedInput::new(1000, 140.0, Sector::Banking, Region::UnitedKingdom).is_err());
    /// ```
    pub fn new(
        total_employees: u64,
        reskilling_percentage: f64,
        sector: Sector,
        region: Region,
    ) -> Result<Self, ValidationError> {
        if total_employees > MAX_TOTAL_EMPLOYEES {
            return Err(ValidationError::OutOfRange {
                field: "totalEmployees",
                value: total_employees as f64,
                bounds: ValidationError::EMPLOYEE_BOUNDS,
            });
        }
        if !reskilling_percentage.is_finite() {
            return Err(ValidationError::NotANumber {
                field: "reskillingPercentage",
                raw: reskilling_percentage.to_string(),
            });
        }
        if !(0.0..=100.0).contains(&reskilling_percentage) {
            return Err(ValidationError::OutOfRange {
                field: "reskillingPercentage",
                value: reskilling_percentage,
                bounds: ValidationError::PERCENT_BOUNDS,
            });
        }

        Ok(Self {
            total_employees,
            reskilling_percentage,
            sector,
            region,
        })
    }

    /// Total headcount.
    pub fn total_employees(&self) -> u64 {
        self.total_employees
    }

    /// Share of the headcount to reskill, on the 0–100 scale.
    pub fn reskilling_percentage(&self) -> f64 {
        self.reskilling_percentage
    }

    /// The sector.
    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// The region.
    pub fn region(&self) -> Region {
        self.region
    }
}
