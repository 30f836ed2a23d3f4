//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::PlaceService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the geocoding service
    pub service: Arc<dyn PlaceService>,
    /// Loaded and validated configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given service and configuration.
    pub fn new(service: Arc<dyn PlaceService>, config: AppConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}
