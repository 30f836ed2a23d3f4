//! Data Transfer Objects for the HTTP layer.

use serde::{Deserialize, Serialize};

/// Query string of the nearby-lookup page.
///
/// Every field is optional so that a missing parameter becomes a 400 page
/// from the handler instead of axum's plain-text rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyQuery {
    #[serde(rename = "placeName")]
    pub place_name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Radius in miles
    pub range: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Configured geocoding service endpoint
    pub service_url: String,
}
