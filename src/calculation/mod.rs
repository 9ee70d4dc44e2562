//! Calculation logic for the reskilling ROI calculator.
//!
//! This module contains input validation, the ROI engine, currency
//! formatting for display, and the pipeline that chains them.

mod calculator;
mod currency;
mod roi;
mod validation;

pub use calculator::{Calculation, calculate, calculate_batch, calculate_validated};
pub use currency::{
    UNDEFINED_ROI, format_assumptions, format_money, format_percent, format_result,
    group_thousands,
};
pub use roi::{compute, employees_to_reskill, roi_percent};
pub use validation::validate;
