//! Sector, region and currency enumerations.
//!
//! These closed enumerations index the reference table. Each carries a
//! `COUNT` and an ordinal `index()` so that tables sized by them are
//! checked for exhaustiveness at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The industry sector a workforce belongs to.
///
/// # Example
///
/// ```
/// use reskilling_roi::models::Sector;
///
/// let sector: Sector = "banking".parse().unwrap();
/// assert_eq!(sector, Sector::Banking);
/// assert_eq!(sector.to_string(), "banking");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Retail, commercial and investment banking.
    Banking,
    /// Insurance carriers and brokers.
    Insurance,
    /// Legal services.
    Law,
}

impl Sector {
    /// Number of sectors.
    pub const COUNT: usize = 3;

    /// Every sector in ordinal order.
    pub const ALL: [Sector; Sector::COUNT] = [Sector::Banking, Sector::Insurance, Sector::Law];

    /// Ordinal position, used to index the reference table.
    pub const fn index(self) -> usize {
        match self {
            Sector::Banking => 0,
            Sector::Insurance => 1,
            Sector::Law => 2,
        }
    }

    /// The wire name of the sector.
    pub const fn as_str(self) -> &'static str {
        match self {
            Sector::Banking => "banking",
            Sector::Insurance => "insurance",
            Sector::Law => "law",
        }
    }

    /// A human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Sector::Banking => "Banking",
            Sector::Insurance => "Insurance",
            Sector::Law => "Law",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ValidationError;

    /// Parses a sector from its exact, case-sensitive wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownEnumMember {
                field: "sector",
                value: s.to_string(),
            })
    }
}

/// A currency, fixed by region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Pound sterling.
    Gbp,
    /// Hong Kong dollar.
    Hkd,
    /// Australian dollar.
    Aud,
}

impl Currency {
    /// The ISO 4217 code.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
            Currency::Aud => "AUD",
        }
    }

    /// The display symbol placed before amounts.
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Hkd => "HK$",
            Currency::Aud => "AU$",
        }
    }
}

/// The geographic region a workforce is based in.
///
/// Wire names are `"UK"`, `"HK"` and `"Australia"`. The short code `"AU"`
/// is accepted as an alias when parsing.
///
/// # Example
///
/// ```
/// use reskilling_roi::models::{Currency, Region};
///
/// let region: Region = "Australia".parse().unwrap();
/// assert_eq!(region, "AU".parse::<Region>().unwrap());
/// assert_eq!(region.currency(), Currency::Aud);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United Kingdom.
    #[serde(rename = "UK")]
    UnitedKingdom,
    /// Hong Kong.
    #[serde(rename = "HK")]
    HongKong,
    /// Australia.
    #[serde(rename = "Australia", alias = "AU")]
    Australia,
}

impl Region {
    /// Number of regions.
    pub const COUNT: usize = 3;

    /// Every region in ordinal order.
    pub const ALL: [Region; Region::COUNT] =
        [Region::UnitedKingdom, Region::HongKong, Region::Australia];

    /// Ordinal position, used to index the reference table.
    pub const fn index(self) -> usize {
        match self {
            Region::UnitedKingdom => 0,
            Region::HongKong => 1,
            Region::Australia => 2,
        }
    }

    /// The wire name of the region.
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::UnitedKingdom => "UK",
            Region::HongKong => "HK",
            Region::Australia => "Australia",
        }
    }

    /// The short region code.
    pub const fn code(self) -> &'static str {
        match self {
            Region::UnitedKingdom => "UK",
            Region::HongKong => "HK",
            Region::Australia => "AU",
        }
    }

    /// A human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Region::UnitedKingdom => "UK",
            Region::HongKong => "Hong Kong",
            Region::Australia => "Australia",
        }
    }

    /// The currency all amounts for this region are expressed in.
    pub const fn currency(self) -> Currency {
        match self {
            Region::UnitedKingdom => Currency::Gbp,
            Region::HongKong => Currency::Hkd,
            Region::Australia => Currency::Aud,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    /// Parses a region from its wire name or short code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s || region.code() == s)
            .ok_or_else(|| ValidationError::UnknownEnumMember {
                field: "region",
                value: s.to_string(),
            })
    }
}
