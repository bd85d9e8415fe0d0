#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Wildfire cause taxonomy types and derivation rules.
//!
//! This crate defines the canonical fire-cause taxonomy used across the
//! entire wildfire-map system. The raw incident data carries one binary
//! flag per cause; [`MainCategory::from_flags`] normalizes those flags
//! into the shared taxonomy.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Top-level fire-cause classification.
///
/// Every fire record carries exactly one main category, derived from the
/// mutually-exclusive-in-practice binary cause flags in the raw data.
/// The free-form `category` string on each record refines this into a
/// specific sub-cause.
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
pub enum MainCategory {
    /// A previously extinguished fire that reignited
    Rekindling,
    /// Accidental or careless human causes (burns, machinery, cigarettes)
    Negligent,
    /// Deliberately set fires (arson)
    Intentional,
    /// Natural causes, unknown causes, and everything unclassified
    Other,
}

impl MainCategory {
    /// Derives the main category from the raw data's binary cause flags.
    ///
    /// The source data occasionally sets more than one flag on a record;
    /// the precedence here is `Intentional` over `Negligent` over
    /// `Rekindling`, matching the order the upstream dataset resolves
    /// conflicts in. A record with no flag set is `Other`.
    #[must_use]
    pub const fn from_flags(rekindling: bool, negligent: bool, intentional: bool) -> Self {
        if intentional {
            Self::Intentional
        } else if negligent {
            Self::Negligent
        } else if rekindling {
            Self::Rekindling
        } else {
            Self::Other
        }
    }

    /// Returns all variants of this enum, in canonical display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Rekindling,
            Self::Negligent,
            Self::Intentional,
            Self::Other,
        ]
    }
}

/// Normalizes a free-form sub-cause label into title case.
///
/// The raw data mixes casings for the same sub-cause (`"arson"`,
/// `"ARSON"`, `"Arson"`). Grouping by category requires one canonical
/// spelling: every letter that follows a non-letter is uppercased and
/// the rest lowercased, so hyphenated and slashed labels re-capitalize
/// at each segment (`"use-of-fire"` becomes `"Use-Of-Fire"`).
#[must_use]
pub fn title_case_category(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_was_letter = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}
