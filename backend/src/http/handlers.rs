//! HTTP handlers for the place search pages.
//!
//! Each handler corresponds to one page and delegates the service round trip
//! to the service layer.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::collections::HashMap;

use super::dto::{HealthResponse, NearbyQuery};
use super::error::AppError;
use super::state::AppState;
use crate::form::params::ADD_NEARBY_POINT;
use crate::form::{is_finite_number, SearchForm};
use crate::models::{GeoPoint, NearbyRequest};
use crate::render::page::{nearby_heading, results_page, search_form_page, search_heading};
use crate::render::{ResultTable, TableKind};
use crate::services::{run_nearby, run_search};

/// Result type for page handlers.
pub type PageResult = Result<Html<String>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Liveness probe. Does not call the geocoding service.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service_url: state.config.service.base_url.to_string(),
    })
}

// =============================================================================
// Search
// =============================================================================

/// GET /
///
/// The search form, prefilled from the query string. The "Add Point" button
/// submits back here with `addNearbyPoint` set, which grows the nearby table
/// by one row.
pub async fn search_form(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let max_rows = state.config.service.max_nearby_points;
    let mut form = SearchForm::from_params(&params, max_rows);
    if params.contains_key(ADD_NEARBY_POINT) {
        form.add_nearby_row(max_rows);
    }

    Html(search_form_page(&form, None).into_string())
}

/// GET /geosearch
///
/// Validate the submitted form, run the search and render the result table
/// with drill-down links.
pub async fn geosearch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> PageResult {
    let form = SearchForm::from_params(&params, state.config.service.max_nearby_points);
    let request = form.validate().map_err(|error| {
        tracing::info!(error = %error, "Search form rejected");
        AppError::Validation {
            form: Box::new(form.clone()),
            error,
        }
    })?;

    let heading = search_heading(&request.place_name);
    let results = run_search(state.service.as_ref(), &state.config.service, &request)
        .await
        .map_err(|error| AppError::Upstream {
            heading: heading.clone(),
            kind: TableKind::Search,
            error,
        })?;

    let table = ResultTable::for_search(&results);
    Ok(Html(results_page(&heading, &table, None).into_string()))
}

// =============================================================================
// Nearby Lookup
// =============================================================================

/// GET /nearbyplaces?placeName=..&latitude=..&longitude=..[&range=..]
///
/// Radius lookup around one result. Without `range` the configured default
/// radius is used. Coordinates are accepted in any form the result parser
/// accepts, so every drill-down link on a results page resolves.
pub async fn nearby_places(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> PageResult {
    let latitude = require_number("latitude", query.latitude.as_deref())?;
    let longitude = require_number("longitude", query.longitude.as_deref())?;
    let range = query
        .range
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    if let Some(range) = range {
        if !is_finite_number(range) {
            return Err(AppError::BadRequest(format!(
                "range must be a number of miles, got \"{}\".",
                range
            )));
        }
    }

    let settings = &state.config.service;
    let request = NearbyRequest::from_lookup(
        query.place_name.unwrap_or_default().trim(),
        GeoPoint::new(latitude, longitude),
        range,
        &settings.default_radius_text(),
    );

    let heading = nearby_heading(&request.place_name, &request.point);
    let results = run_nearby(state.service.as_ref(), settings, &request)
        .await
        .map_err(|error| AppError::Upstream {
            heading: heading.clone(),
            kind: TableKind::Nearby,
            error,
        })?;

    let table = ResultTable::for_nearby(&results);
    Ok(Html(results_page(&heading, &table, None).into_string()))
}

fn require_number(name: &str, value: Option<&str>) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if is_finite_number(v) => Ok(v.to_string()),
        Some(v) if !v.is_empty() => Err(AppError::BadRequest(format!(
            "{} must be a number, got \"{}\".",
            name, v
        ))),
        _ => Err(AppError::BadRequest(format!("{} is required.", name))),
    }
}
