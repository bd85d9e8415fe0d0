//! Portuguese district reference tables.
//!
//! Provides the fixed mapping from the 18 mainland district names to
//! their [`Zone`], plus district seat coordinates for map rendering.
//! District names match the spelling used in the incident data
//! (accented, title case).

use crate::{UnknownRegionError, Zone};

/// The 18 mainland Portuguese districts.
pub const DISTRICTS: &[&str] = &[
    "Aveiro",
    "Beja",
    "Braga",
    "Bragança",
    "Castelo Branco",
    "Coimbra",
    "Évora",
    "Faro",
    "Guarda",
    "Leiria",
    "Lisboa",
    "Portalegre",
    "Porto",
    "Santarém",
    "Setúbal",
    "Viana do Castelo",
    "Vila Real",
    "Viseu",
];

/// Classifies a district name into its [`Zone`].
///
/// Total over [`DISTRICTS`]; any other input is an error. The original
/// dashboard silently left unrecognized regions unclassified, which made
/// them vanish from the zone-colored charts — rejecting explicitly
/// surfaces bad input instead.
///
/// # Errors
///
/// Returns [`UnknownRegionError`] if `region` is not one of the 18
/// known district names.
pub fn zone_for_region(region: &str) -> Result<Zone, UnknownRegionError> {
    match region {
        "Viana do Castelo" | "Braga" | "Porto" | "Vila Real" | "Bragança" => Ok(Zone::North),
        "Aveiro" | "Viseu" | "Guarda" | "Coimbra" | "Castelo Branco" | "Leiria" | "Santarém"
        | "Lisboa" => Ok(Zone::Center),
        "Portalegre" | "Setúbal" | "Évora" | "Beja" | "Faro" => Ok(Zone::South),
        _ => Err(UnknownRegionError {
            region: region.to_string(),
        }),
    }
}

/// Returns the `(latitude, longitude)` of the district seat, used to
/// place the district marker on the map.
///
/// Returns `None` for unrecognized district names.
#[must_use]
pub fn district_coordinates(region: &str) -> Option<(f64, f64)> {
    match region {
        "Aveiro" => Some((40.6405, -8.6538)),
        "Beja" => Some((38.0151, -7.8632)),
        "Braga" => Some((41.5454, -8.4265)),
        "Bragança" => Some((41.8060, -6.7567)),
        "Castelo Branco" => Some((39.8222, -7.4918)),
        "Coimbra" => Some((40.2033, -8.4103)),
        "Évora" => Some((38.5714, -7.9135)),
        "Faro" => Some((37.0194, -7.9304)),
        "Guarda" => Some((40.5373, -7.2675)),
        "Leiria" => Some((39.7436, -8.8070)),
        "Lisboa" => Some((38.7223, -9.1393)),
        "Portalegre" => Some((39.2967, -7.4286)),
        "Porto" => Some((41.1579, -8.6291)),
        "Santarém" => Some((39.2362, -8.6870)),
        "Setúbal" => Some((38.5244, -8.8882)),
        "Viana do Castelo" => Some((41.6918, -8.8344)),
        "Vila Real" => Some((41.3006, -7.7441)),
        "Viseu" => Some((40.6566, -7.9125)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_count() {
        assert_eq!(DISTRICTS.len(), 18);
    }

    #[test]
    fn zone_coverage() {
        for district in DISTRICTS {
            assert!(
                zone_for_region(district).is_ok(),
                "no zone for district: {district}"
            );
        }
    }

    #[test]
    fn known_zones() {
        assert_eq!(zone_for_region("Porto"), Ok(Zone::North));
        assert_eq!(zone_for_region("Coimbra"), Ok(Zone::Center));
        assert_eq!(zone_for_region("Faro"), Ok(Zone::South));
    }

    #[test]
    fn zone_sizes() {
        let mut north = 0;
        let mut center = 0;
        let mut south = 0;
        for district in DISTRICTS {
            match zone_for_region(district).unwrap() {
                Zone::North => north += 1,
                Zone::Center => center += 1,
                Zone::South => south += 1,
            }
        }
        assert_eq!((north, center, south), (5, 8, 5));
    }

    #[test]
    fn coordinate_coverage() {
        for district in DISTRICTS {
            assert!(
                district_coordinates(district).is_some(),
                "no coordinates for district: {district}"
            );
        }
    }

    #[test]
    fn unknown_region() {
        let err = zone_for_region("Madrid").unwrap_err();
        assert_eq!(err.region, "Madrid");
        assert_eq!(district_coordinates("Madrid"), None);
    }
}
