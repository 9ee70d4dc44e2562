//! Result models for an ROI calculation.
//!
//! [`RoiResult`] holds the unrounded figures produced by the engine.
//! [`FormattedResult`] is the same record rendered for display.

use serde::{Deserialize, Serialize};

/// The outcome of one ROI calculation.
///
/// Monetary fields are in the region's currency and are not rounded.
/// `roi_percent` is `None` when the reskilling cost is zero, in which case
/// ROI is undefined and serialises as `null`.
///
/// # Example
///
/// ```
/// use reskilling_roi::models::RoiResult;
///
/// let empty = RoiResult::zero();
/// assert_eq!(empty.employees_to_reskill, 0);
/// assert!(empty.roi_percent.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    /// Number of employees to reskill (floored).
    pub employees_to_reskill: u64,
    /// Total cost of hiring externally instead.
    pub cost_hiring_externally: f64,
    /// Total cost of reskilling internally.
    pub cost_reskilling_internally: f64,
    /// Value of the productivity uplift.
    pub productivity_savings: f64,
    /// Turnover cost avoided through better retention.
    pub retention_savings: f64,
    /// Onboarding cost avoided.
    pub onboarding_savings: f64,
    /// Sum of productivity, retention and onboarding savings.
    pub total_financial_benefits: f64,
    /// Benefits less reskilling cost. May be negative.
    pub net_benefit: f64,
    /// Return on the reskilling cost, in percent. `None` when undefined.
    pub roi_percent: Option<f64>,
}

impl RoiResult {
    /// A result with nobody to reskill.
    pub fn zero() -> Self {
        Self {
            employees_to_reskill: 0,
            cost_hiring_externally: 0.0,
            cost_reskilling_internally: 0.0,
            productivity_savings: 0.0,
            retention_savings: 0.0,
            onboarding_savings: 0.0,
            total_financial_benefits: 0.0,
            net_benefit: 0.0,
            roi_percent: None,
        }
    }

    /// Returns the monetary fields in display order.
    pub fn monetary_fields(&self) -> [f64; 7] {
        [
            self.cost_hiring_externally,
            self.cost_reskilling_internally,
            self.productivity_savings,
            self.retention_savings,
            self.onboarding_savings,
            self.total_financial_benefits,
            self.net_benefit,
        ]
    }
}

/// A [`RoiResult`] rendered for display in the region's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    /// Employee count with thousands separators.
    pub employees_to_reskill: String,
    /// e.g. `£4,000,000`.
    pub cost_hiring_externally: String,
    /// e.g. `£2,000,000`.
    pub cost_reskilling_internally: String,
    /// Formatted productivity savings.
    pub productivity_savings: String,
    /// Formatted retention savings.
    pub retention_savings: String,
    /// Formatted onboarding savings.
    pub onboarding_savings: String,
    /// Formatted total benefits.
    pub total_financial_benefits: String,
    /// Formatted net benefit, with a leading minus when negative.
    pub net_benefit: String,
    /// e.g. `270.0%`, or `n/a` when undefined.
    pub roi_percent: String,
}
