//! Return-on-investment calculator for workforce reskilling decisions.
//!
//! Given a headcount, a reskilling share, a sector and a region, this crate
//! estimates the cost of reskilling internally versus hiring externally,
//! the resulting productivity, retention and onboarding benefits, and the
//! ROI, all in the region's currency.
//!
//! The core (`calculation`, `config`, `models`) is pure and synchronous.
//! The `api` module is a thin axum layer over it.
//!
//! # Example
//!
//! ```
//! use reskilling_roi::calculation::{calculate, format_money, format_percent};
//! use reskilling_roi::config::ReferenceTable;
//! use reskilling_roi::models::RawInput;
//!
//! let table = ReferenceTable::embedded();
//! let calc = calculate(&RawInput::new("1000", "40", "banking", "UK"), &table).unwrap();
//!
//! assert_eq!(format_money(calc.result.net_benefit, calc.input.region()), "£5,400,000");
//! assert_eq!(format_percent(calc.result.roi_percent), "270.0%");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
