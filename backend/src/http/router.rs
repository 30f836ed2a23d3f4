//! Router configuration for the place search site.
//!
//! This module sets up all routes and middleware (compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::search_form))
        .route("/geosearch", get(handlers::geosearch))
        .route("/nearbyplaces", get(handlers::nearby_places))
        // Old bookmarks point at the script names.
        .route("/index.php", get(handlers::search_form))
        .route("/geosearch.php", get(handlers::geosearch))
        .route("/nearbyplaces.php", get(handlers::nearby_places))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::TransportError;
    use crate::services::PlaceService;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;
    use url::Url;

    struct Offline;

    #[async_trait]
    impl PlaceService for Offline {
        async fn fetch(&self, url: &Url) -> Result<String, TransportError> {
            Err(TransportError::Connect {
                url: url.to_string(),
                message: "offline".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_router_serves_health_without_calling_service() {
        let state = AppState::new(Arc::new(Offline), AppConfig::default());
        let response = create_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_maps_offline_service_to_bad_gateway() {
        let state = AppState::new(Arc::new(Offline), AppConfig::default());
        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/geosearch?placeName=Ithaca")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
