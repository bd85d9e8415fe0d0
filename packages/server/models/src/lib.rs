#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the wildfire map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the engine's aggregate types where the API contract
//! differs from the internal shape (CSV-style column names stay out of
//! the API).

use serde::{Deserialize, Serialize};
use wildfire_map_dataset_models::ExpenditureRecord;
use wildfire_map_geography_models::Zone;

/// Health-check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Always `true` when the server is responding.
    pub healthy: bool,
    /// Server crate version.
    pub version: String,
}

/// A district with its zone and map marker position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// District name.
    pub region: String,
    /// Zone the district belongs to.
    pub zone: Zone,
    /// Latitude of the district seat.
    pub latitude: f64,
    /// Longitude of the district seat.
    pub longitude: f64,
}

/// One year of the expenditure table as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiExpenditureYear {
    /// Calendar year.
    pub year: i32,
    /// Fire-brigade expenditure for the year, in euros.
    pub expenditure: f64,
    /// Total hectares burnt that year.
    pub total_burnt_area: f64,
    /// Euros spent per hectare burnt.
    pub ratio: f64,
}

impl From<ExpenditureRecord> for ApiExpenditureYear {
    fn from(record: ExpenditureRecord) -> Self {
        Self {
            year: record.year,
            expenditure: record.expenditure,
            total_burnt_area: record.total_burnt_area,
            ratio: record.ratio,
        }
    }
}

/// Query parameters for the single-year chart endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearQueryParams {
    /// Requested year (the year slider's value).
    pub year: i32,
}

/// Query parameters for the year-range chart endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQueryParams {
    /// First year of the range (inclusive).
    pub from: i32,
    /// Last year of the range (inclusive).
    pub to: i32,
}
