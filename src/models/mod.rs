//! Core data models for the reskilling ROI calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod assumptions;
mod input;
mod roi_result;
mod segment;

pub use assumptions::{AssumptionRecord, FormattedAssumptions};
pub use input::{MAX_TOTAL_EMPLOYEES, RawField, RawInput, ValidatedInput};
pub use roi_result::{FormattedResult, RoiResult};
pub use segment::{Currency, Region, Sector};
