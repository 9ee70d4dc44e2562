//! The reference data compiled into the binary.

use crate::models::{AssumptionRecord, Region, Sector};

use super::ReferenceTable;

/// Version label of the embedded data.
pub const EMBEDDED_VERSION: &str = "2024.1";

const fn cell(
    average_salary: u64,
    cost_hiring_externally: u64,
    cost_reskilling_internally: u64,
    productivity_uplift: f64,
    retention_increase: f64,
    cost_turnover: u64,
    onboarding_cost: u64,
) -> AssumptionRecord {
    AssumptionRecord {
        average_salary,
        cost_hiring_externally,
        cost_reskilling_internally,
        productivity_uplift,
        retention_increase,
        cost_turnover,
        onboarding_cost,
    }
}

// Rows are sectors, columns are regions, both in ordinal order.
const EMBEDDED_CELLS: [[AssumptionRecord; Region::COUNT]; Sector::COUNT] = [
    // banking
    [
        cell(50_000, 10_000, 5_000, 15.0, 20.0, 30_000, 5_000),
        cell(600_000, 80_000, 40_000, 12.0, 15.0, 250_000, 40_000),
        cell(90_000, 15_000, 8_000, 10.0, 18.0, 50_000, 7_000),
    ],
    // insurance
    [
        cell(45_000, 8_000, 4_000, 12.0, 18.0, 25_000, 4_000),
        cell(500_000, 70_000, 35_000, 10.0, 12.0, 200_000, 35_000),
        cell(85_000, 12_000, 7_000, 8.0, 15.0, 45_000, 6_000),
    ],
    // law
    [
        cell(60_000, 12_000, 6_000, 10.0, 15.0, 35_000, 6_000),
        cell(800_000, 100_000, 50_000, 8.0, 10.0, 300_000, 50_000),
        cell(100_000, 18_000, 10_000, 7.0, 12.0, 60_000, 8_000),
    ],
];

impl ReferenceTable {
    /// The built-in industry averages.
    pub fn embedded() -> Self {
        ReferenceTable::new(EMBEDDED_VERSION, EMBEDDED_CELLS)
    }
}
