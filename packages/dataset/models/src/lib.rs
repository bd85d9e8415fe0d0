#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Wildfire incident and expenditure record types.
//!
//! These types mirror the CSV files one-to-one: [`RawFireRow`] is the
//! upstream export with its binary cause flags, [`FireRecord`] is the
//! derived row the engine consumes, and [`ExpenditureRecord`] carries
//! the fire-brigade spending joined against yearly burnt area. Serde
//! renames keep the struct fields aligned with the CSV headers.

use serde::{Deserialize, Serialize};
use wildfire_map_fire_models::{MainCategory, title_case_category};

/// A single wildfire incident, as stored in `main_data.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireRecord {
    /// Upstream incident identifier.
    pub code: String,
    /// District the fire occurred in.
    pub region: String,
    /// County (concelho) within the district.
    pub county: String,
    /// Calendar year of the fire.
    pub year: i32,
    /// Hectares burnt.
    #[serde(rename = "total_ba")]
    pub total_burnt_area: f64,
    /// Specific sub-cause label, title-cased.
    pub category: String,
    /// Top-level cause classification.
    #[serde(rename = "main_cat")]
    pub main_category: MainCategory,
}

impl From<RawFireRow> for FireRecord {
    fn from(raw: RawFireRow) -> Self {
        Self {
            code: raw.code,
            region: raw.region,
            county: raw.county,
            year: raw.year,
            total_burnt_area: raw.total_burnt_area,
            category: title_case_category(&raw.category),
            main_category: MainCategory::from_flags(
                raw.rekindling != 0,
                raw.negligent != 0,
                raw.intentional != 0,
            ),
        }
    }
}

/// A row of the upstream `fire_final.csv` export, before cause
/// derivation.
///
/// The upstream data encodes the cause as three 0/1 columns instead of
/// a single label; [`FireRecord::from`] collapses them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFireRow {
    /// Upstream incident identifier.
    pub code: String,
    /// District the fire occurred in.
    pub region: String,
    /// County (concelho) within the district.
    pub county: String,
    /// Calendar year of the fire.
    pub year: i32,
    /// Hectares burnt.
    #[serde(rename = "total_ba")]
    pub total_burnt_area: f64,
    /// Specific sub-cause label, free-form casing.
    pub category: String,
    /// 1 if the fire was a rekindling.
    pub rekindling: u8,
    /// 1 if the fire had a negligent cause.
    pub negligent: u8,
    /// 1 if the fire was set intentionally.
    pub intentional: u8,
}

/// A row of the upstream `fire_brigade.csv` export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawExpenditureRow {
    /// Calendar year.
    #[serde(alias = "Years")]
    pub year: i32,
    /// Fire-brigade expenditure for the year, in euros.
    #[serde(alias = "Fire Brigade expenditure")]
    pub expenditure: f64,
}

/// Yearly fire-brigade expenditure joined with total burnt area, as
/// stored in `expenditure.csv`.
///
/// `ratio` is always derived from the other two columns, never read
/// from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenditureRecord {
    /// Calendar year.
    pub year: i32,
    /// Fire-brigade expenditure for the year, in euros.
    pub expenditure: f64,
    /// Total hectares burnt that year, summed over all records.
    #[serde(rename = "total_ba")]
    pub total_burnt_area: f64,
    /// Euros spent per hectare burnt.
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(rekindling: u8, negligent: u8, intentional: u8) -> RawFireRow {
        RawFireRow {
            code: "PT123".to_string(),
            region: "Porto".to_string(),
            county: "Amarante".to_string(),
            year: 2010,
            total_burnt_area: 12.5,
            category: "use of fire".to_string(),
            rekindling,
            negligent,
            intentional,
        }
    }

    #[test]
    fn raw_row_derivation() {
        let record = FireRecord::from(raw_row(0, 1, 0));
        assert_eq!(record.main_category, MainCategory::Negligent);
        assert_eq!(record.category, "Use Of Fire");
        assert_eq!(record.region, "Porto");
        assert!((record.total_burnt_area - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unflagged_row_is_other() {
        let record = FireRecord::from(raw_row(0, 0, 0));
        assert_eq!(record.main_category, MainCategory::Other);
    }
}
