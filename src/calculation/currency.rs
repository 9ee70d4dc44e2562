//! Currency and percentage formatting for display.

use crate::models::{AssumptionRecord, FormattedAssumptions, FormattedResult, Region, RoiResult};

/// Text shown in place of an undefined ROI.
pub const UNDEFINED_ROI: &str = "n/a";

/// Formats an amount in a region's currency.
///
/// The amount is rounded half away from zero to whole units and grouped
/// in thousands with commas. Negative amounts put the minus sign before
/// the symbol.
///
/// # Examples
///
/// ```
/// use reskilling_roi::calculation::format_money;
/// use reskilling_roi::models::Region;
///
/// assert_eq!(format_money(5_400_000.0, Region::UnitedKingdom), "£5,400,000");
/// assert_eq!(format_money(-1234.4, Region::UnitedKingdom), "-£1,234");
/// assert_eq!(format_money(999.5, Region::HongKong), "HK$1,000");
/// assert_eq!(format_money(0.0, Region::Australia), "AU$0");
/// ```
pub fn format_money(amount: f64, region: Region) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // Saturates for values beyond u64; non-finite input renders as zero.
    let units = rounded.abs() as u64;

    format!(
        "{}{}{}",
        sign,
        region.currency().symbol(),
        group_thousands(units)
    )
}

/// Formats an ROI percentage with one fractional digit, or `n/a`.
///
/// Ties round half away from zero, as money does.
///
/// # Example
///
/// ```
/// use reskilling_roi::calculation::format_percent;
///
/// assert_eq!(format_percent(Some(211.428_571)), "211.4%");
/// assert_eq!(format_percent(None), "n/a");
/// ```
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        // `{:.1}` alone would round ties to even. Adding 0.0 clears a negative zero.
        Some(value) => format!("{:.1}%", (value * 10.0).round() / 10.0 + 0.0),
        None => UNDEFINED_ROI.to_string(),
    }
}

/// Renders every field of a result for display.
pub fn format_result(result: &RoiResult, region: Region) -> FormattedResult {
    let money = |amount: f64| format_money(amount, region);

    FormattedResult {
        employees_to_reskill: group_thousands(result.employees_to_reskill),
        cost_hiring_externally: money(result.cost_hiring_externally),
        cost_reskilling_internally: money(result.cost_reskilling_internally),
        productivity_savings: money(result.productivity_savings),
        retention_savings: money(result.retention_savings),
        onboarding_savings: money(result.onboarding_savings),
        total_financial_benefits: money(result.total_financial_benefits),
        net_benefit: money(result.net_benefit),
        roi_percent: format_percent(result.roi_percent),
    }
}

/// Renders an assumption record for the industry averages panel.
///
/// Percentages are shown as given, without forcing a fractional digit.
pub fn format_assumptions(record: &AssumptionRecord, region: Region) -> FormattedAssumptions {
    let money = |amount: u64| format_money(amount as f64, region);

    FormattedAssumptions {
        average_salary: money(record.average_salary),
        cost_hiring_externally_per_employee: money(record.cost_hiring_externally),
        cost_reskilling_internally_per_employee: money(record.cost_reskilling_internally),
        productivity_uplift: format!("{}%", record.productivity_uplift),
        retention_increase: format!("{}%", record.retention_increase),
        cost_turnover: money(record.cost_turnover),
        onboarding_cost: money(record.onboarding_cost),
    }
}

/// Inserts a comma every three digits, e.g. `1234567` → `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
