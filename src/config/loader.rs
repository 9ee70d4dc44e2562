//! Reference data loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! [`ReferenceTable`] from a YAML file in place of the embedded data.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{AssumptionRecord, Region, Sector};

use super::types::{ReferenceDataFile, ReferenceTable};

const UNSET: AssumptionRecord = AssumptionRecord {
    average_salary: 0,
    cost_hiring_externally: 0,
    cost_reskilling_internally: 0,
    productivity_uplift: 0.0,
    retention_increase: 0.0,
    cost_turnover: 0,
    onboarding_cost: 0,
};

/// Loads a reference table from a YAML file.
///
/// The file must list exactly one entry for every (sector, region) pair:
///
/// ```yaml
/// version: "2024.1"
/// entries:
///   - sector: banking
///     region: UK
///     averageSalary: 50000
///     costHiringExternally: 10000
///     costReskillingInternally: 5000
///     productivityUplift: 15
///     retentionIncrease: 20
///     costTurnover: 30000
///     onboardingCost: 5000
///   # ... eight more entries
/// ```
///
/// Totality is checked here, once, so lookups on the resulting table can
/// never miss.
///
/// # Example
///
/// ```no_run
/// use reskilling_roi::config::ConfigLoader;
/// use reskilling_roi::models::{Region, Sector};
///
/// let loader = ConfigLoader::load("./config/reference_data.yaml").unwrap();
/// let a = loader.table().assumptions(Sector::Law, Region::HongKong);
/// println!("Average salary: {}", a.average_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: ReferenceTable,
}

impl ConfigLoader {
    /// Loads reference data from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if it is not valid YAML or has malformed fields
    /// - `DuplicateAssumption` / `MissingAssumption` if it is not exactly total
    /// - `InvalidAssumption` if a percentage lies outside `[0, 100]`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses reference data from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let file: ReferenceDataFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let table = Self::build_table(file)?;
        Ok(Self { table })
    }

    /// Checks entries for totality and ranges, then lays them out by ordinal.
    fn build_table(file: ReferenceDataFile) -> EngineResult<ReferenceTable> {
        let mut cells = [[UNSET; Region::COUNT]; Sector::COUNT];
        let mut seen = [[false; Region::COUNT]; Sector::COUNT];

        for entry in &file.entries {
            let record = AssumptionRecord::from(entry);
            if !record.percentages_in_range() {
                return Err(EngineError::InvalidAssumption {
                    sector: entry.sector,
                    region: entry.region,
                    message: format!(
                        "percentages must lie in [0, 100] (productivityUplift: {}, retentionIncrease: {})",
                        record.productivity_uplift, record.retention_increase
                    ),
                });
            }

            let (s, r) = (entry.sector.index(), entry.region.index());
            if seen[s][r] {
                return Err(EngineError::DuplicateAssumption {
                    sector: entry.sector,
                    region: entry.region,
                });
            }
            seen[s][r] = true;
            cells[s][r] = record;
        }

        for sector in Sector::ALL {
            for region in Region::ALL {
                if !seen[sector.index()][region.index()] {
                    return Err(EngineError::MissingAssumption { sector, region });
                }
            }
        }

        Ok(ReferenceTable::new(file.version, cells))
    }

    /// Returns the loaded table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Consumes the loader, returning the table.
    pub fn into_table(self) -> ReferenceTable {
        self.table
    }
}
