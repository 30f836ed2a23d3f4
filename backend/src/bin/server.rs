//! Place Search HTTP Server Binary
//!
//! This is the main entry point for the place search site. It loads the
//! configuration, builds the geocoding service client, sets up the HTTP
//! router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Defaults, or ./geosearch.toml when present
//! cargo run --bin geosearch-server
//!
//! # Point at another geocoding service
//! GEOSEARCH_SERVICE_URL=https://geo.example.org/GeoreferenceWeb/geosearch \
//!   cargo run --bin geosearch-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `GEOSEARCH_CONFIG`: Path to a TOML config file
//! - `GEOSEARCH_SERVICE_URL`: Geocoding service base URL
//! - `GEOSEARCH_TIMEOUT_SECS`: Outbound request timeout
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geosearch_web::config::AppConfig;
use geosearch_web::http::{create_router, AppState};
use geosearch_web::services::HttpPlaceService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting place search server");

    let config = AppConfig::load()?;
    info!(
        service_url = %config.service.base_url,
        timeout_secs = config.service.timeout_secs,
        encoding = ?config.service.encoding,
        "Configuration loaded"
    );

    let service = HttpPlaceService::new(&config.service)?;
    let addr = config.socket_addr()?;

    // Create application state and router
    let state = AppState::new(Arc::new(service), config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
