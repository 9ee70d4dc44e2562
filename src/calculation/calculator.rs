//! The validate → look up → compute pipeline.

use crate::config::ReferenceTable;
use crate::error::ValidationError;
use crate::models::{AssumptionRecord, RawInput, RoiResult, ValidatedInput};

use super::{compute, validate};

/// A completed calculation: the validated input, the assumptions it was
/// computed against, and the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// The input after validation.
    pub input: ValidatedInput,
    /// The assumptions looked up for the input's sector and region.
    pub assumptions: AssumptionRecord,
    /// The computed result.
    pub result: RoiResult,
}

/// Validates a raw input and computes its ROI against a reference table.
///
/// Validation errors are returned before anything is computed.
///
/// # Example
///
/// ```
/// use reskilling_roi::calculation::calculate;
/// use reskilling_roi::config::ReferenceTable;
/// use reskilling_roi::models::RawInput;
///
/// let table = ReferenceTable::embedded();
/// let calc = calculate(&RawInput::new("100", "100", "law", "Australia"), &table).unwrap();
/// assert_eq!(calc.result.employees_to_reskill, 100);
/// assert_eq!(calc.result.net_benefit, 1_220_000.0);
/// ```
pub fn calculate(raw: &RawInput, table: &ReferenceTable) -> Result<Calculation, ValidationError> {
    let input = validate(raw)?;
    Ok(calculate_validated(input, table))
}

/// Computes the ROI for an already-validated input.
pub fn calculate_validated(input: ValidatedInput, table: &ReferenceTable) -> Calculation {
    let assumptions = *table.assumptions(input.sector(), input.region());
    let result = compute(&input, &assumptions);

    Calculation {
        input,
        assumptions,
        result,
    }
}

/// Runs [`calculate`] over a batch of inputs, preserving order.
///
/// Each input is independent; one failing does not affect the others.
pub fn calculate_batch(
    inputs: &[RawInput],
    table: &ReferenceTable,
) -> Vec<Result<Calculation, ValidationError>> {
    inputs.iter().map(|raw| calculate(raw, table)).collect()
}
