//! The ROI engine.
//!
//! A closed-form, single-period estimate of what reskilling part of a
//! workforce costs and returns, given the industry assumptions for its
//! sector and region.

use crate::models::{AssumptionRecord, RoiResult, ValidatedInput};

/// Number of employees to reskill: `floor(total × percentage / 100)`.
///
/// The product is taken before the division so that whole-number
/// percentages of whole headcounts are exact.
///
/// # Example
///
/// ```
/// use reskilling_roi::calculation::employees_to_reskill;
///
/// assert_eq!(employees_to_reskill(1000, 40.0), 400);
/// assert_eq!(employees_to_reskill(3, 40.0), 1);
/// assert_eq!(employees_to_reskill(100, 29.0), 29);
/// ```
pub fn employees_to_reskill(total_employees: u64, reskilling_percentage: f64) -> u64 {
    let n = (total_employees as f64 * reskilling_percentage / 100.0).floor();
    (n as u64).min(total_employees)
}

/// Computes the ROI of reskilling for a validated input.
///
/// ```text
/// N   = floor(totalEmployees × reskillingPercentage / 100)
/// HC  = N × costHiringExternally
/// RC  = N × costReskillingInternally
/// PS  = N × averageSalary × productivityUplift / 100
/// RS  = N × costTurnover × retentionIncrease / 100
/// OS  = N × onboardingCost
/// TB  = PS + RS + OS
/// NB  = TB − RC
/// ROI = NB / RC × 100, or undefined when RC = 0
/// ```
///
/// Monetary figures are not rounded here. The function is pure.
///
/// # Examples
///
/// ```
/// use reskilling_roi::calculation::compute;
/// use reskilling_roi::config::ReferenceTable;
/// use reskilling_roi::models::{Region, Sector, ValidatedInput};
///
/// let table = ReferenceTable::embedded();
/// let input = ValidatedInput::new(1000, 40.0, Sector::Banking, Region::UnitedKingdom).unwrap();
/// let result = compute(&input, table.assumptions(input.sector(), input.region()));
///
/// assert_eq!(result.employees_to_reskill, 400);
/// assert_eq!(result.total_financial_benefits, 7_400_000.0);
/// assert_eq!(result.net_benefit, 5_400_000.0);
/// assert!((result.roi_percent.unwrap() - 270.0).abs() < 1e-9);
/// ```
pub fn compute(input: &ValidatedInput, a: &AssumptionRecord) -> RoiResult {
    let employees = employees_to_reskill(input.total_employees(), input.reskilling_percentage());
    let n = employees as f64;

    let cost_hiring_externally = n * a.cost_hiring_externally as f64;
    let cost_reskilling_internally = n * a.cost_reskilling_internally as f64;

    let productivity_savings = n * a.average_salary as f64 * a.productivity_uplift / 100.0;
    let retention_savings = n * a.cost_turnover as f64 * a.retention_increase / 100.0;
    let onboarding_savings = n * a.onboarding_cost as f64;
    let total_financial_benefits = productivity_savings + retention_savings + onboarding_savings;

    let net_benefit = total_financial_benefits - cost_reskilling_internally;

    RoiResult {
        employees_to_reskill: employees,
        cost_hiring_externally,
        cost_reskilling_internally,
        productivity_savings,
        retention_savings,
        onboarding_savings,
        total_financial_benefits,
        net_benefit,
        roi_percent: roi_percent(total_financial_benefits, cost_reskilling_internally),
    }
}

/// `(benefits − cost) / cost × 100`, or `None` when the cost is not positive.
pub fn roi_percent(benefits: f64, cost: f64) -> Option<f64> {
    (cost > 0.0).then(|| (benefits - cost) / cost * 100.0)
}
