#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query parameter and aggregate result types for the wildfire engine.
//!
//! The UI controls (year slider, range slider) map onto the validated
//! [`Year`] and [`YearRange`] parameters here; the engine returns the
//! aggregate types, which serialize straight to the JSON the dashboard
//! charts consume. Aggregates are transient — computed fresh per query,
//! never persisted.

use serde::{Deserialize, Serialize};
use wildfire_map_geography_models::Zone;

/// First year covered by the dataset.
pub const YEAR_MIN: i32 = 2001;
/// Last year covered by the dataset.
pub const YEAR_MAX: i32 = 2018;

/// A year within the dataset's coverage, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Validates that `year` falls within the dataset's coverage.
    ///
    /// # Errors
    ///
    /// Returns [`YearOutOfRangeError`] if `year` is outside
    /// `[YEAR_MIN, YEAR_MAX]`.
    pub const fn new(year: i32) -> Result<Self, YearOutOfRangeError> {
        if year >= YEAR_MIN && year <= YEAR_MAX {
            Ok(Self(year))
        } else {
            Err(YearOutOfRangeError { year })
        }
    }

    /// Returns the underlying year value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// An inclusive year range, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    /// Validates bounds and ordering for an inclusive year range.
    ///
    /// # Errors
    ///
    /// Returns [`YearOutOfRangeError`] if either bound is outside the
    /// dataset's coverage, or an equivalent error with the start year if
    /// `start > end`.
    pub const fn new(start: i32, end: i32) -> Result<Self, YearOutOfRangeError> {
        let start = match Year::new(start) {
            Ok(year) => year,
            Err(e) => return Err(e),
        };
        let end = match Year::new(end) {
            Ok(year) => year,
            Err(e) => return Err(e),
        };
        if start.value() > end.value() {
            return Err(YearOutOfRangeError {
                year: start.value(),
            });
        }
        Ok(Self { start, end })
    }

    /// First year of the range.
    #[must_use]
    pub const fn start(self) -> Year {
        self.start
    }

    /// Last year of the range (inclusive).
    #[must_use]
    pub const fn end(self) -> Year {
        self.end
    }

    /// Whether `year` falls inside the range.
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year >= self.start.value() && year <= self.end.value()
    }
}

/// Error returned when a requested year falls outside the dataset's
/// coverage (or a range is inverted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearOutOfRangeError {
    /// The offending year.
    pub year: i32,
}

impl std::fmt::Display for YearOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "year {} outside dataset coverage {YEAR_MIN}-{YEAR_MAX} (ranges must be ascending)",
            self.year
        )
    }
}

impl std::error::Error for YearOutOfRangeError {}

/// Burnt area summed over one district for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAggregate {
    /// District name.
    pub region: String,
    /// Hectares burnt in the district that year.
    pub total_burnt_area: f64,
    /// Zone the district belongs to.
    pub zone: Zone,
}

/// Fire count for one county within a district for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyAggregate {
    /// District name.
    pub region: String,
    /// County (concelho) name.
    pub county: String,
    /// Number of fires recorded in the county that year.
    pub count: u64,
    /// Zone the district belongs to.
    pub zone: Zone,
}

/// One edge of a [`FlowGraph`], from a main-category node to a
/// sub-cause node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    /// Index of the main-category node in [`FlowGraph::nodes`].
    pub source: usize,
    /// Index of the sub-cause node in [`FlowGraph::nodes`].
    pub target: usize,
    /// Hectares burnt flowing along this edge. Zero is a valid value
    /// and is preserved so node/edge indices stay stable across calls.
    pub value: f64,
}

/// Node/edge data for the cause-flow (Sankey) chart.
///
/// Main-category nodes come first in [`Self::nodes`], followed by the
/// sub-cause nodes in ascending label order. Colors and layout are the
/// frontend's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGraph {
    /// Node labels: main categories, then sub-causes.
    pub nodes: Vec<String>,
    /// One edge per (main category, sub-cause) pivot cell.
    pub edges: Vec<FlowEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds() {
        assert!(Year::new(YEAR_MIN).is_ok());
        assert!(Year::new(YEAR_MAX).is_ok());
        assert_eq!(
            Year::new(2000),
            Err(YearOutOfRangeError { year: 2000 })
        );
        assert_eq!(
            Year::new(2019),
            Err(YearOutOfRangeError { year: 2019 })
        );
    }

    #[test]
    fn range_ordering() {
        let range = YearRange::new(2003, 2007).unwrap();
        assert_eq!(range.start().value(), 2003);
        assert_eq!(range.end().value(), 2007);
        assert!(range.contains(2003));
        assert!(range.contains(2007));
        assert!(!range.contains(2008));

        assert!(YearRange::new(2007, 2003).is_err());
        // Single-year ranges are allowed
        assert!(YearRange::new(2005, 2005).is_ok());
    }
}
