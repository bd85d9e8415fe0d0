//! Aggregation functions backing each dashboard chart.
//!
//! All functions are pure transforms over borrowed data: filter to the
//! requested year(s), group, sum or count, annotate with the zone from
//! the district reference table. Output ordering is always explicit
//! (sorted), since grouping order carries no meaning.

use std::collections::{BTreeMap, HashMap};

use wildfire_map_analytics_models::{
    CountyAggregate, FlowEdge, FlowGraph, RegionAggregate, Year, YearRange,
};
use wildfire_map_dataset::Dataset;
use wildfire_map_dataset_models::{ExpenditureRecord, FireRecord, RawExpenditureRow};
use wildfire_map_fire_models::MainCategory;
use wildfire_map_geography_models::regions::zone_for_region;

use crate::AnalyticsError;

/// Fraction of county groups trimmed from the bottom of each district
/// in [`aggregate_by_region_county`].
const COUNTY_COUNT_PERCENTILE: f64 = 0.10;

/// Sums burnt area per district for one year.
///
/// Result is sorted by district name ascending. A year with no
/// matching records yields an empty vec.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownRegion`] if a matching record
/// carries a region name outside the 18-district set.
pub fn aggregate_by_region(
    dataset: &Dataset,
    year: Year,
) -> Result<Vec<RegionAggregate>, AnalyticsError> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for fire in dataset.fires() {
        if fire.year == year.value() {
            *sums.entry(fire.region.as_str()).or_default() += fire.total_burnt_area;
        }
    }

    sums.into_iter()
        .map(|(region, total_burnt_area)| {
            Ok(RegionAggregate {
                region: region.to_string(),
                total_burnt_area,
                zone: zone_for_region(region)?,
            })
        })
        .collect()
}

/// Counts fires per (district, county) for one year, dropping county
/// groups at or below the 10th percentile of counts within their
/// district.
///
/// The percentile trim removes long-tail counties that would clutter
/// the county chart. Result is sorted by zone name ascending, then
/// district, then county.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownRegion`] if a matching record
/// carries a region name outside the 18-district set.
pub fn aggregate_by_region_county(
    dataset: &Dataset,
    year: Year,
) -> Result<Vec<CountyAggregate>, AnalyticsError> {
    let mut counts: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for fire in dataset.fires() {
        if fire.year == year.value() {
            *counts
                .entry((fire.region.as_str(), fire.county.as_str()))
                .or_default() += 1;
        }
    }

    // Per-district count distributions, for the percentile threshold
    let mut per_region: BTreeMap<&str, Vec<u64>> = BTreeMap::new();
    for (&(region, _), &count) in &counts {
        per_region.entry(region).or_default().push(count);
    }
    let thresholds: BTreeMap<&str, f64> = per_region
        .into_iter()
        .map(|(region, mut region_counts)| {
            region_counts.sort_unstable();
            (region, percentile(&region_counts, COUNTY_COUNT_PERCENTILE))
        })
        .collect();

    let mut aggregates = counts
        .into_iter()
        .filter(|&((region, _), count)| {
            #[allow(clippy::cast_precision_loss)]
            let exceeds = count as f64 > thresholds[region];
            exceeds
        })
        .map(|((region, county), count)| {
            Ok(CountyAggregate {
                region: region.to_string(),
                county: county.to_string(),
                count,
                zone: zone_for_region(region)?,
            })
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    aggregates.sort_by(|a, b| {
        (a.zone.as_ref(), &a.region, &a.county).cmp(&(b.zone.as_ref(), &b.region, &b.county))
    });
    Ok(aggregates)
}

/// Builds the cause-flow graph for an inclusive year range.
///
/// Burnt area is summed per (main category, sub-cause) pair and
/// pivoted: main-category nodes first (taxonomy order), then sub-cause
/// nodes (label order), with one edge per pivot cell. Cells with no
/// records keep a zero-valued edge so node and edge indices stay
/// stable across repeated calls.
#[must_use]
pub fn build_flow_graph(dataset: &Dataset, range: YearRange) -> FlowGraph {
    let mut sums: BTreeMap<(MainCategory, &str), f64> = BTreeMap::new();
    for fire in dataset.fires() {
        if range.contains(fire.year) {
            *sums
                .entry((fire.main_category, fire.category.as_str()))
                .or_default() += fire.total_burnt_area;
        }
    }

    let mains: Vec<MainCategory> = MainCategory::all()
        .iter()
        .copied()
        .filter(|main| sums.keys().any(|&(m, _)| m == *main))
        .collect();
    let categories: Vec<&str> = {
        let mut labels: Vec<&str> = sums.keys().map(|&(_, c)| c).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    };

    let mut nodes: Vec<String> = mains.iter().map(ToString::to_string).collect();
    nodes.extend(categories.iter().map(ToString::to_string));

    let mut edges = Vec::with_capacity(mains.len() * categories.len());
    for (source, &main) in mains.iter().enumerate() {
        for (offset, &category) in categories.iter().enumerate() {
            edges.push(FlowEdge {
                source,
                target: mains.len() + offset,
                value: sums.get(&(main, category)).copied().unwrap_or(0.0),
            });
        }
    }

    FlowGraph { nodes, edges }
}

/// Sums burnt area per year over the whole dataset.
#[must_use]
pub fn yearly_burnt_area(dataset: &Dataset) -> BTreeMap<i32, f64> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for fire in dataset.fires() {
        *totals.entry(fire.year).or_default() += fire.total_burnt_area;
    }
    totals
}

/// Joins yearly burnt-area totals with fire-brigade expenditure and
/// derives the euros-per-hectare ratio.
///
/// Inner join on year: years present in only one source are dropped.
/// (The upstream tables cover the same span, so a mismatch means a
/// truncated export rather than missing data.) Result is sorted by
/// year ascending.
///
/// # Errors
///
/// Returns [`AnalyticsError::ZeroBurntArea`] if a joined year has zero
/// total burnt area, which would make the ratio undefined.
pub fn compute_ratio(
    fires: &[FireRecord],
    expenditures: &[RawExpenditureRow],
) -> Result<Vec<ExpenditureRecord>, AnalyticsError> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for fire in fires {
        *totals.entry(fire.year).or_default() += fire.total_burnt_area;
    }

    let spending: HashMap<i32, f64> = expenditures
        .iter()
        .map(|row| (row.year, row.expenditure))
        .collect();

    let mut records = Vec::with_capacity(totals.len());
    for (year, total_burnt_area) in totals {
        let Some(&expenditure) = spending.get(&year) else {
            log::debug!("No expenditure data for year {year}; dropping it from the join");
            continue;
        };
        if total_burnt_area == 0.0 {
            return Err(AnalyticsError::ZeroBurntArea { year });
        }
        records.push(ExpenditureRecord {
            year,
            expenditure,
            total_burnt_area,
            ratio: expenditure / total_burnt_area,
        });
    }
    Ok(records)
}

/// Linear-interpolation percentile over an ascending-sorted sample.
///
/// `q` is a fraction in `[0, 1]`. For tiny samples the interpolated
/// value is unstable by nature; callers accept that.
fn percentile(sorted: &[u64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rank = q * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = rank.floor() as usize;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hi = (rank.ceil() as usize).min(sorted.len() - 1);
    #[allow(clippy::cast_precision_loss)]
    let (lo_val, hi_val) = (sorted[lo] as f64, sorted[hi] as f64);
    lo_val + (hi_val - lo_val) * (rank - rank.floor())
}

#[cfg(test)]
mod tests {
    use wildfire_map_geography_models::Zone;

    use super::*;

    fn fire(region: &str, county: &str, year: i32, area: f64, category: &str) -> FireRecord {
        let main_category = match category {
            "Arson" => MainCategory::Intentional,
            "Use Of Fire" | "Machinery" => MainCategory::Negligent,
            "Rekindling" => MainCategory::Rekindling,
            _ => MainCategory::Other,
        };
        FireRecord {
            code: format!("PT-{region}-{county}-{year}"),
            region: region.to_string(),
            county: county.to_string(),
            year,
            total_burnt_area: area,
            category: category.to_string(),
            main_category,
        }
    }

    fn dataset(fires: Vec<FireRecord>) -> Dataset {
        Dataset::new(fires, Vec::new())
    }

    fn year(y: i32) -> Year {
        Year::new(y).unwrap()
    }

    #[test]
    fn region_aggregation_sorted_with_zones() {
        let ds = dataset(vec![
            fire("Porto", "Amarante", 2010, 100.0, "Arson"),
            fire("Faro", "Loulé", 2010, 50.0, "Use Of Fire"),
        ]);

        let aggregates = aggregate_by_region(&ds, year(2010)).unwrap();
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].region, "Faro");
        assert!((aggregates[0].total_burnt_area - 50.0).abs() < f64::EPSILON);
        assert_eq!(aggregates[0].zone, Zone::South);
        assert_eq!(aggregates[1].region, "Porto");
        assert!((aggregates[1].total_burnt_area - 100.0).abs() < f64::EPSILON);
        assert_eq!(aggregates[1].zone, Zone::North);
    }

    #[test]
    fn region_aggregation_preserves_totals() {
        let ds = dataset(vec![
            fire("Porto", "Amarante", 2010, 10.0, "Arson"),
            fire("Porto", "Baião", 2010, 20.0, "Arson"),
            fire("Faro", "Loulé", 2010, 30.0, "Arson"),
            fire("Faro", "Loulé", 2011, 999.0, "Arson"),
        ]);

        let aggregates = aggregate_by_region(&ds, year(2010)).unwrap();
        let aggregated: f64 = aggregates.iter().map(|a| a.total_burnt_area).sum();
        let raw: f64 = ds
            .fires()
            .iter()
            .filter(|f| f.year == 2010)
            .map(|f| f.total_burnt_area)
            .sum();
        assert!((aggregated - raw).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_year_is_empty_not_error() {
        let ds = dataset(vec![fire("Porto", "Amarante", 2010, 10.0, "Arson")]);
        let aggregates = aggregate_by_region(&ds, year(2015)).unwrap();
        assert!(aggregates.is_empty());
    }

    #[test]
    fn unknown_region_is_rejected() {
        let ds = dataset(vec![fire("Madrid", "Centro", 2010, 10.0, "Arson")]);
        let err = aggregate_by_region(&ds, year(2010)).unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownRegion(_)));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = dataset(vec![
            fire("Porto", "Amarante", 2010, 10.0, "Arson"),
            fire("Faro", "Loulé", 2010, 30.0, "Use Of Fire"),
        ]);
        assert_eq!(
            aggregate_by_region(&ds, year(2010)).unwrap(),
            aggregate_by_region(&ds, year(2010)).unwrap()
        );
        assert_eq!(
            build_flow_graph(&ds, YearRange::new(2010, 2010).unwrap()),
            build_flow_graph(&ds, YearRange::new(2010, 2010).unwrap())
        );
    }

    #[test]
    fn county_percentile_filter_drops_sparse_counties() {
        // Two Porto counties: count 9 vs count 1. The 10th percentile
        // of [1, 9] interpolates to 1.8, so only the busy county stays.
        let mut fires = vec![fire("Porto", "Baião", 2010, 1.0, "Arson")];
        for _ in 0..9 {
            fires.push(fire("Porto", "Amarante", 2010, 1.0, "Arson"));
        }
        let ds = dataset(fires);

        let aggregates = aggregate_by_region_county(&ds, year(2010)).unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].county, "Amarante");
        assert_eq!(aggregates[0].count, 9);
        assert_eq!(aggregates[0].zone, Zone::North);
    }

    #[test]
    fn county_results_sorted_by_zone_name() {
        // Two counties per district, counts 3 vs 1: the 10th percentile
        // of [1, 3] is 1.2, so only the count-3 county survives in each
        let mut fires = Vec::new();
        for (region, busy, sparse) in [
            ("Porto", "Amarante", "Baião"),
            ("Faro", "Loulé", "Tavira"),
            ("Coimbra", "Lousã", "Penela"),
        ] {
            fires.push(fire(region, sparse, 2010, 1.0, "Arson"));
            for _ in 0..3 {
                fires.push(fire(region, busy, 2010, 1.0, "Arson"));
            }
        }
        let ds = dataset(fires);

        let aggregates = aggregate_by_region_county(&ds, year(2010)).unwrap();
        let counties: Vec<&str> = aggregates.iter().map(|a| a.county.as_str()).collect();
        assert_eq!(counties, vec!["Lousã", "Amarante", "Loulé"]);
        let zones: Vec<&str> = aggregates.iter().map(|a| a.zone.as_ref()).collect();
        // Alphabetical zone order: Center, North, South
        assert_eq!(zones, vec!["Center", "North", "South"]);
    }

    #[test]
    fn single_county_district_trims_itself_out() {
        // A district with one county has a percentile equal to its own
        // count, which the strict exceeds-comparison never passes
        let ds = dataset(vec![
            fire("Évora", "Borba", 2010, 1.0, "Arson"),
            fire("Évora", "Borba", 2010, 2.0, "Arson"),
        ]);

        let aggregates = aggregate_by_region_county(&ds, year(2010)).unwrap();
        assert!(aggregates.is_empty());
    }

    #[test]
    fn flow_graph_shape_and_zero_cells() {
        let ds = dataset(vec![
            fire("Porto", "Amarante", 2010, 100.0, "Arson"),
            fire("Porto", "Amarante", 2011, 25.0, "Machinery"),
            fire("Faro", "Loulé", 2011, 50.0, "Use Of Fire"),
            // Outside the range; must not appear
            fire("Faro", "Loulé", 2014, 999.0, "Lightning"),
        ]);

        let graph = build_flow_graph(&ds, YearRange::new(2010, 2011).unwrap());

        // 2 main categories (Negligent, Intentional) + 3 sub-causes
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 2 * 3);
        assert_eq!(graph.nodes[0], "Negligent");
        assert_eq!(graph.nodes[1], "Intentional");
        assert_eq!(graph.nodes[2..], ["Arson", "Machinery", "Use Of Fire"]);

        // Negligent -> Arson never occurs: the cell is kept at zero
        let zero_edge = graph
            .edges
            .iter()
            .find(|e| e.source == 0 && e.target == 2)
            .unwrap();
        assert!(zero_edge.value.abs() < f64::EPSILON);

        let arson_edge = graph
            .edges
            .iter()
            .find(|e| e.source == 1 && e.target == 2)
            .unwrap();
        assert!((arson_edge.value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flow_graph_empty_range_is_empty() {
        let ds = dataset(vec![fire("Porto", "Amarante", 2010, 1.0, "Arson")]);
        let graph = build_flow_graph(&ds, YearRange::new(2015, 2016).unwrap());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn ratio_join() {
        let fires = vec![
            fire("Porto", "Amarante", 2010, 60.0, "Arson"),
            fire("Faro", "Loulé", 2010, 40.0, "Arson"),
            // 2011 missing from expenditure: dropped by the inner join
            fire("Faro", "Loulé", 2011, 10.0, "Arson"),
        ];
        let expenditures = vec![
            RawExpenditureRow {
                year: 2010,
                expenditure: 1000.0,
            },
            RawExpenditureRow {
                year: 2012,
                expenditure: 500.0,
            },
        ];

        let records = compute_ratio(&fires, &expenditures).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2010);
        assert!((records[0].total_burnt_area - 100.0).abs() < f64::EPSILON);
        assert!((records[0].ratio - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_rejects_zero_burnt_area() {
        let fires = vec![fire("Porto", "Amarante", 2010, 0.0, "Arson")];
        let expenditures = vec![RawExpenditureRow {
            year: 2010,
            expenditure: 1000.0,
        }];

        let err = compute_ratio(&fires, &expenditures).unwrap_err();
        assert!(matches!(err, AnalyticsError::ZeroBurntArea { year: 2010 }));
    }

    #[test]
    fn yearly_totals() {
        let ds = dataset(vec![
            fire("Porto", "Amarante", 2010, 10.0, "Arson"),
            fire("Faro", "Loulé", 2010, 5.0, "Arson"),
            fire("Faro", "Loulé", 2012, 7.0, "Arson"),
        ]);
        let totals = yearly_burnt_area(&ds);
        assert_eq!(totals.len(), 2);
        assert!((totals[&2010] - 15.0).abs() < f64::EPSILON);
        assert!((totals[&2012] - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentile_interpolation() {
        assert!((percentile(&[1, 9], 0.10) - 1.8).abs() < 1e-9);
        assert!((percentile(&[5], 0.10) - 5.0).abs() < 1e-9);
        assert!((percentile(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 0.10) - 1.9).abs() < 1e-9);
        assert!((percentile(&[], 0.10)).abs() < 1e-9);
        assert!((percentile(&[2, 4], 1.0) - 4.0).abs() < 1e-9);
    }
}
