//! Place search: form request → `type=match` URL → result rows.

use crate::config::ServiceSettings;
use crate::error::PipelineResult;
use crate::models::{SearchRequest, SearchResult};
use crate::query::build_search_url;
use crate::render::parse_places;

use super::client::PlaceService;

/// Run one place search against the service.
///
/// Rows come back in service order; the service owns the ranking.
pub async fn run_search(
    service: &dyn PlaceService,
    settings: &ServiceSettings,
    request: &SearchRequest,
) -> PipelineResult<Vec<SearchResult>> {
    let url = build_search_url(request, &settings.base_url, settings.encoding);
    tracing::info!(
        place_name = %request.place_name,
        mode = %request.mode,
        nearby = request.nearby.len(),
        has_bound = request.bound.is_some(),
        "Running place search"
    );

    let body = service.fetch(&url).await?;
    let records = parse_places(&body)?;

    tracing::info!(results = records.len(), "Place search finished");
    Ok(records.into_iter().map(|r| r.into_search_result()).collect())
}
