//! Nearby lookup: drill-down link → `type=nearby` URL → result rows.

use crate::config::ServiceSettings;
use crate::error::PipelineResult;
use crate::models::{NearbyRequest, NearbyResult};
use crate::query::build_nearby_url;
use crate::render::parse_places;

use super::client::PlaceService;

/// Run one nearby lookup. The request already carries its radius; callers
/// build it with [`NearbyRequest::from_lookup`] so a missing radius picks up
/// the configured default.
pub async fn run_nearby(
    service: &dyn PlaceService,
    settings: &ServiceSettings,
    request: &NearbyRequest,
) -> PipelineResult<Vec<NearbyResult>> {
    let url = build_nearby_url(request, &settings.base_url, settings.encoding);
    tracing::info!(
        place_name = %request.place_name,
        point = %request.point,
        radius_miles = %request.radius_miles,
        "Running nearby lookup"
    );

    let body = service.fetch(&url).await?;
    let records = parse_places(&body)?;

    tracing::info!(results = records.len(), "Nearby lookup finished");
    Ok(records.into_iter().map(|r| r.into_nearby_result()).collect())
}
