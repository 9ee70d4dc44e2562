//! HTTP API module for the reskilling ROI calculator.
//!
//! This module provides the REST endpoints that front the calculation
//! core: validation errors become 400 responses, results are returned
//! alongside their formatted rendering.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, CalculationRequest, MAX_BATCH_SIZE};
pub use response::{
    ApiError, ApiErrorResponse, AssumptionsResponse, BatchCalculationResponse, BatchItem,
    CalculationResponse, HealthResponse, ReferenceDataResponse,
};
pub use state::AppState;
