//! Reference data for the reskilling ROI calculator.
//!
//! The table of industry assumptions is embedded at build time and can
//! optionally be replaced by a YAML file at startup. Either way it is
//! immutable once built.
//!
//! # Example
//!
//! ```
//! use reskilling_roi::config::ReferenceTable;
//! use reskilling_roi::models::{Region, Sector};
//!
//! let table = ReferenceTable::embedded();
//! let a = table.assumptions(Sector::Insurance, Region::HongKong);
//! assert_eq!(a.cost_reskilling_internally, 35_000);
//! ```

mod embedded;
mod loader;
mod types;

pub use embedded::EMBEDDED_VERSION;
pub use loader::ConfigLoader;
pub use types::{AssumptionEntry, ReferenceDataFile, ReferenceTable};
