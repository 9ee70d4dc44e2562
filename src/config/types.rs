//! Reference table types.
//!
//! [`ReferenceTable`] is the in-memory table of assumptions. The
//! `ReferenceDataFile` and `AssumptionEntry` types describe the YAML
//! document it can be loaded from.

use serde::Deserialize;

use crate::models::{AssumptionRecord, Region, Sector};

/// Assumptions for every (sector, region) pair.
///
/// Cells are stored in a fixed-size array indexed by enum ordinals, so the
/// table is total by construction and lookups cannot miss. The table is
/// immutable once built and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use reskilling_roi::config::ReferenceTable;
/// use reskilling_roi::models::{Region, Sector};
///
/// let table = ReferenceTable::embedded();
/// let a = table.assumptions(Sector::Banking, Region::UnitedKingdom);
/// assert_eq!(a.average_salary, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    version: String,
    cells: [[AssumptionRecord; Region::COUNT]; Sector::COUNT],
}

impl ReferenceTable {
    /// Creates a table from its version label and fully-populated cells.
    pub fn new(
        version: impl Into<String>,
        cells: [[AssumptionRecord; Region::COUNT]; Sector::COUNT],
    ) -> Self {
        Self {
            version: version.into(),
            cells,
        }
    }

    /// Looks up the assumptions for a (sector, region) pair.
    pub fn assumptions(&self, sector: Sector, region: Region) -> &AssumptionRecord {
        &self.cells[sector.index()][region.index()]
    }

    /// The version label of the loaded data.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Iterates over every cell in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, Region, &AssumptionRecord)> + '_ {
        Sector::ALL.into_iter().flat_map(move |sector| {
            Region::ALL
                .into_iter()
                .map(move |region| (sector, region, self.assumptions(sector, region)))
        })
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::embedded()
    }
}

/// One cell of a reference data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionEntry {
    /// The sector this entry applies to.
    pub sector: Sector,
    /// The region this entry applies to.
    pub region: Region,
    /// Average annual salary.
    pub average_salary: u64,
    /// Cost to hire one external replacement.
    pub cost_hiring_externally: u64,
    /// Cost to reskill one existing employee.
    pub cost_reskilling_internally: u64,
    /// Productivity gain in percent.
    pub productivity_uplift: f64,
    /// Retention gain in percent.
    pub retention_increase: f64,
    /// Cost of one departure.
    pub cost_turnover: u64,
    /// Onboarding cost per hire.
    pub onboarding_cost: u64,
}

impl From<&AssumptionEntry> for AssumptionRecord {
    fn from(entry: &AssumptionEntry) -> Self {
        AssumptionRecord {
            average_salary: entry.average_salary,
            cost_hiring_externally: entry.cost_hiring_externally,
            cost_reskilling_internally: entry.cost_reskilling_internally,
            productivity_uplift: entry.productivity_uplift,
            retention_increase: entry.retention_increase,
            cost_turnover: entry.cost_turnover,
            onboarding_cost: entry.onboarding_cost,
        }
    }
}

/// Top-level structure of a reference data YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDataFile {
    /// Version label for this data set.
    pub version: String,
    /// One entry per (sector, region) pair.
    pub entries: Vec<AssumptionEntry>,
}
