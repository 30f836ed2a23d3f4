//! HTTP access to the geocoding service.

use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use url::Url;

use crate::config::ServiceSettings;
use crate::error::TransportError;

const USER_AGENT: &str = concat!("geosearch-web/", env!("CARGO_PKG_VERSION"));

/// Fetches a fully composed service URL and returns the response body.
///
/// Handlers only see this trait, so tests can swap in a canned service.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to live in the shared app state.
#[async_trait]
pub trait PlaceService: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, TransportError>;
}

/// [`PlaceService`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpPlaceService {
    client: Client,
}

impl HttpPlaceService {
    pub fn new(settings: &ServiceSettings) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/xml, text/xml"),
        );

        let client = Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PlaceService for HttpPlaceService {
    async fn fetch(&self, url: &Url) -> Result<String, TransportError> {
        tracing::debug!(%url, "Calling place search service");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Place search service returned an error status");
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    url: url.to_string(),
                }
            } else {
                TransportError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

fn classify(url: &Url, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
