//! Per-(sector, region) industry assumptions.

use serde::{Deserialize, Serialize};

/// Industry averages for one (sector, region) cell of the reference table.
///
/// Monetary fields are whole units of the region's currency. Percentage
/// fields are kept on the 0–100 scale and divided by 100 only where they
/// are applied.
///
/// # Example
///
/// ```
/// use reskilling_roi::models::AssumptionRecord;
///
/// let record = AssumptionRecord {
///     average_salary: 50_000,
///     cost_hiring_externally: 10_000,
///     cost_reskilling_internally: 5_000,
///     productivity_uplift: 15.0,
///     retention_increase: 20.0,
///     cost_turnover: 30_000,
///     onboarding_cost: 5_000,
/// };
/// assert!(record.percentages_in_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionRecord {
    /// Average annual salary per reskilled employee.
    pub average_salary: u64,
    /// One-off cost to hire one external replacement.
    pub cost_hiring_externally: u64,
    /// One-off cost to reskill one existing employee.
    pub cost_reskilling_internally: u64,
    /// Expected productivity gain from reskilling, as a percent of salary.
    pub productivity_uplift: f64,
    /// Reduction in turnover probability from reskilling, in percent.
    pub retention_increase: f64,
    /// Cost incurred when one employee leaves and is replaced.
    pub cost_turnover: u64,
    /// Cost avoided per retained employee.
    pub onboarding_cost: u64,
}

impl AssumptionRecord {
    /// Returns true if both percentage fields lie in `[0, 100]`.
    pub fn percentages_in_range(&self) -> bool {
        let in_range = |p: f64| p.is_finite() && (0.0..=100.0).contains(&p);
        in_range(self.productivity_uplift) && in_range(self.retention_increase)
    }
}

/// An [`AssumptionRecord`] rendered for display. Monetary figures are
/// per employee, not totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAssumptions {
    /// Average salary per employee.
    pub average_salary: String,
    /// Cost to hire one external replacement.
    pub cost_hiring_externally_per_employee: String,
    /// Cost to reskill one employee.
    pub cost_reskilling_internally_per_employee: String,
    /// e.g. `15%`.
    pub productivity_uplift: String,
    /// e.g. `20%`.
    pub retention_increase: String,
    /// Cost of one departure.
    pub cost_turnover: String,
    /// Onboarding cost per hire.
    pub onboarding_cost: String,
}
