//! HTTP handler functions for the wildfire map API.
//!
//! Parameter validation failures are 400s with a JSON error body;
//! engine failures are 500s. A valid query that matches nothing is a
//! 200 with an empty array — the frontend renders an empty chart.

use actix_web::{HttpResponse, web};
use wildfire_map_analytics::engine;
use wildfire_map_analytics_models::{Year, YearRange};
use wildfire_map_geography_models::regions::{DISTRICTS, district_coordinates, zone_for_region};
use wildfire_map_server_models::{
    ApiExpenditureYear, ApiHealth, ApiRegion, RangeQueryParams, YearQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/regions`
///
/// Returns the 18 districts with zone and map marker position.
pub async fn regions() -> HttpResponse {
    HttpResponse::Ok().json(region_table())
}

/// `GET /api/burnt-area?year=Y`
///
/// Burnt area per district for the year slider's barplot and map.
pub async fn burnt_area(
    state: web::Data<AppState>,
    params: web::Query<YearQueryParams>,
) -> HttpResponse {
    let year = match Year::new(params.year) {
        Ok(year) => year,
        Err(e) => return bad_request(&e),
    };

    match engine::aggregate_by_region(&state.dataset, year) {
        Ok(aggregates) => HttpResponse::Ok().json(aggregates),
        Err(e) => {
            log::error!("Failed to aggregate burnt area: {e}");
            internal_error("Failed to aggregate burnt area")
        }
    }
}

/// `GET /api/county-counts?year=Y`
///
/// Percentile-filtered fire counts per county for the sunburst chart.
pub async fn county_counts(
    state: web::Data<AppState>,
    params: web::Query<YearQueryParams>,
) -> HttpResponse {
    let year = match Year::new(params.year) {
        Ok(year) => year,
        Err(e) => return bad_request(&e),
    };

    match engine::aggregate_by_region_county(&state.dataset, year) {
        Ok(aggregates) => HttpResponse::Ok().json(aggregates),
        Err(e) => {
            log::error!("Failed to aggregate county counts: {e}");
            internal_error("Failed to aggregate county counts")
        }
    }
}

/// `GET /api/cause-flow?from=A&to=B`
///
/// Cause-flow graph for the range slider's Sankey chart.
pub async fn cause_flow(
    state: web::Data<AppState>,
    params: web::Query<RangeQueryParams>,
) -> HttpResponse {
    let range = match YearRange::new(params.from, params.to) {
        Ok(range) => range,
        Err(e) => return bad_request(&e),
    };

    HttpResponse::Ok().json(engine::build_flow_graph(&state.dataset, range))
}

/// `GET /api/expenditure`
///
/// The full yearly expenditure/ratio table for the expenditure chart.
pub async fn expenditure(state: web::Data<AppState>) -> HttpResponse {
    let years: Vec<ApiExpenditureYear> = state
        .dataset
        .expenditures()
        .iter()
        .cloned()
        .map(ApiExpenditureYear::from)
        .collect();

    HttpResponse::Ok().json(years)
}

/// Builds the district reference table served by `/api/regions`.
///
/// Both lookup tables are total over [`DISTRICTS`], so entries that
/// fail either lookup are skipped rather than failing the request.
fn region_table() -> Vec<ApiRegion> {
    DISTRICTS
        .iter()
        .filter_map(|&district| {
            let zone = zone_for_region(district).ok()?;
            let (latitude, longitude) = district_coordinates(district)?;
            Some(ApiRegion {
                region: district.to_string(),
                zone,
                latitude,
                longitude,
            })
        })
        .collect()
}

fn bad_request(error: &impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": error.to_string()
    }))
}

fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": message
    }))
}
