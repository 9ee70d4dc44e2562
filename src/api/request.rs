//! Request types for the ROI calculator API.
//!
//! This module defines the JSON request bodies for the `/calculate` and
//! `/calculate/batch` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::RawInput;

/// Request body for the `/calculate` endpoint.
///
/// Fields may be JSON numbers or strings; validation happens in the
/// calculation layer, not during deserialization.
pub type CalculationRequest = RawInput;

/// Largest number of inputs accepted in one batch request.
pub const MAX_BATCH_SIZE: usize = 1_000;

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The inputs to calculate, answered in the same order.
    pub inputs: Vec<CalculationRequest>,
}
