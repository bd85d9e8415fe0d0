#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! District-to-zone classification and map coordinate tables.
//!
//! Mainland Portugal is divided into 18 administrative districts; the
//! dashboard groups them into three coarse zones (North, Center, South)
//! for the zone-colored charts. The mapping is a fixed reference table,
//! total over the known district set.

pub mod regions;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse geographic zone a district belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Zone {
    /// Minho, Douro, and Trás-os-Montes districts
    North,
    /// Beiras, Estremadura, and Ribatejo districts
    Center,
    /// Alentejo and Algarve districts
    South,
}

impl Zone {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::North, Self::Center, Self::South]
    }
}

/// Error returned when a region name is not one of the 18 known
/// districts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegionError {
    /// The region name that failed to classify.
    pub region: String,
}

impl std::fmt::Display for UnknownRegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown region '{}': expected one of the 18 mainland districts",
            self.region
        )
    }
}

impl std::error::Error for UnknownRegionError {}
