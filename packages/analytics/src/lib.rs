#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region classification and aggregation engine for the wildfire map.
//!
//! Every chart on the dashboard is fed by one function in
//! [`engine`]: pure, stateless group-by aggregations over the shared
//! read-only [`wildfire_map_dataset::Dataset`]. A query that matches no
//! records returns an empty result, never an error — the frontend
//! renders an empty chart.

pub mod engine;

use thiserror::Error;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A record carried a region name outside the 18-district set.
    #[error("Region classification error: {0}")]
    UnknownRegion(#[from] wildfire_map_geography_models::UnknownRegionError),

    /// A year's total burnt area was zero, leaving the expenditure
    /// ratio undefined.
    #[error("Total burnt area for year {year} is zero; expenditure ratio is undefined")]
    ZeroBurntArea {
        /// The year with no recorded burnt area.
        year: i32,
    },
}
