//! Input validation.
//!
//! [`validate`] is the single point where raw form values become typed
//! ones. Fields are checked in a fixed order (totalEmployees,
//! reskillingPercentage, sector, region) and the first failure is reported.

use crate::error::ValidationError;
use crate::models::{MAX_TOTAL_EMPLOYEES, RawField, RawInput, Region, Sector, ValidatedInput};

/// Validates and normalises a raw input.
///
/// # Rules
///
/// - Missing fields and empty or blank strings yield `MissingField`.
/// - Numeric strings that fail to parse, or parse to a non-finite value,
///   yield `NotANumber`.
/// - A negative or fractional employee count, or a percentage outside
///   `[0, 100]`, yields `OutOfRange`.
/// - An unrecognised sector or region yields `UnknownEnumMember`.
///
/// Percentages stay on the 0–100 scale.
///
/// # Examples
///
/// ```
/// use reskilling_roi::calculation::validate;
/// use reskilling_roi::error::ValidationError;
/// use reskilling_roi::models::{RawInput, Region, Sector};
///
/// let input = validate(&RawInput::new("1000", 40.0, "banking", "UK")).unwrap();
/// assert_eq!(input.total_employees(), 1000);
/// assert_eq!(input.region(), Region::UnitedKingdom);
///
/// let err = validate(&RawInput::new(1000u64, 40.0, "banking", "US")).unwrap_err();
/// assert_eq!(
///     err,
///     ValidationError::UnknownEnumMember { field: "region", value: "US".to_string() }
/// );
/// ```
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, ValidationError> {
    let total_employees = parse_employee_count(raw.total_employees.as_ref())?;
    let reskilling_percentage = parse_percentage(raw.reskilling_percentage.as_ref())?;
    let sector: Sector = required_text("sector", raw.sector.as_ref())?.parse()?;
    let region: Region = required_text("region", raw.region.as_ref())?.parse()?;

    ValidatedInput::new(total_employees, reskilling_percentage, sector, region)
}

fn parse_employee_count(field: Option<&RawField>) -> Result<u64, ValidationError> {
    const NAME: &str = "totalEmployees";

    let value = parse_number(NAME, field)?;
    if value < 0.0 || value.fract() != 0.0 || value > MAX_TOTAL_EMPLOYEES as f64 {
        return Err(ValidationError::OutOfRange {
            field: NAME,
            value,
            bounds: ValidationError::EMPLOYEE_BOUNDS,
        });
    }

    Ok(value as u64)
}

fn parse_percentage(field: Option<&RawField>) -> Result<f64, ValidationError> {
    const NAME: &str = "reskillingPercentage";

    let value = parse_number(NAME, field)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: NAME,
            value,
            bounds: ValidationError::PERCENT_BOUNDS,
        });
    }

    Ok(value)
}

fn parse_number(name: &'static str, field: Option<&RawField>) -> Result<f64, ValidationError> {
    let value = match field {
        None => return Err(ValidationError::MissingField { field: name }),
        Some(RawField::Number(n)) => *n,
        Some(RawField::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::MissingField { field: name });
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| ValidationError::NotANumber {
                    field: name,
                    raw: text.clone(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: name,
            raw: raw_text(field),
        });
    }

    Ok(value)
}

fn required_text(name: &'static str, field: Option<&RawField>) -> Result<String, ValidationError> {
    match field {
        None => Err(ValidationError::MissingField { field: name }),
        Some(RawField::Text(text)) if text.trim().is_empty() => {
            Err(ValidationError::MissingField { field: name })
        }
        Some(RawField::Text(text)) => Ok(text.trim().to_string()),
        Some(RawField::Number(n)) => Ok(n.to_string()),
    }
}

fn raw_text(field: Option<&RawField>) -> String {
    match field {
        Some(RawField::Text(text)) => text.clone(),
        Some(RawField::Number(n)) => n.to_string(),
        None => String::new(),
    }
}
