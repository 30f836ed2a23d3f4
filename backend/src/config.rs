//! Application configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables. Every field has a default, so an empty file (or
//! no file at all) gives a working local setup.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [service]
//! base_url = "http://localhost:8080/GeoreferenceWeb/geosearch"
//! timeout_secs = 10
//! default_nearby_radius_miles = 5
//! max_nearby_points = 20
//! encoding = "full"          # or "spaces_only"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::query::PlaceNameEncoding;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GEOSEARCH_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: {message}")]
    Env { var: &'static str, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub service: ServiceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Everything about the upstream geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Radius used by the nearby page when the link carries none.
    #[serde(default = "default_nearby_radius")]
    pub default_nearby_radius_miles: f64,
    /// Upper bound on nearby rows read from one form submission.
    #[serde(default = "default_max_nearby_points")]
    pub max_nearby_points: usize,
    #[serde(default)]
    pub encoding: PlaceNameEncoding,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8080/GeoreferenceWeb/geosearch")
        .expect("valid default service URL")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_nearby_radius() -> f64 {
    5.0
}

fn default_max_nearby_points() -> usize {
    20
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_nearby_radius_miles: default_nearby_radius(),
            max_nearby_points: default_max_nearby_points(),
            encoding: PlaceNameEncoding::default(),
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The default radius as it goes on the wire (`5`, `2.5`, ...).
    pub fn default_radius_text(&self) -> String {
        self.default_nearby_radius_miles.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location.
    ///
    /// Uses `$GEOSEARCH_CONFIG` when set, otherwise the first of
    /// `geosearch.toml`, `backend/geosearch.toml` and `../geosearch.toml`
    /// that exists. Falls back to the built-in defaults.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("geosearch.toml"),
            PathBuf::from("backend/geosearch.toml"),
            PathBuf::from("../geosearch.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment overrides.
    ///
    /// # Environment Variables
    /// - `HOST`: server host
    /// - `PORT`: server port
    /// - `GEOSEARCH_SERVICE_URL`: geocoding service base URL
    /// - `GEOSEARCH_TIMEOUT_SECS`: outbound request timeout
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::Env {
                var: "PORT",
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Ok(base_url) = env::var("GEOSEARCH_SERVICE_URL") {
            self.service.base_url = Url::parse(&base_url).map_err(|e| ConfigError::Env {
                var: "GEOSEARCH_SERVICE_URL",
                message: e.to_string(),
            })?;
        }
        if let Ok(timeout) = env::var("GEOSEARCH_TIMEOUT_SECS") {
            self.service.timeout_secs = timeout.parse().map_err(|_| ConfigError::Env {
                var: "GEOSEARCH_TIMEOUT_SECS",
                message: format!("'{}' is not a whole number of seconds", timeout),
            })?;
        }
        Ok(())
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme = self.service.base_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::Invalid(format!(
                "service.base_url must be http or https, got '{}'",
                scheme
            )));
        }
        if self.service.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "service.timeout_secs must be greater than zero".to_string(),
            ));
        }
        let radius = self.service.default_nearby_radius_miles;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "service.default_nearby_radius_miles must be a positive number, got {}",
                radius
            )));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// File (or defaults), then environment, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigError::Invalid(format!(
                    "'{}:{}' is not a valid listen address",
                    self.server.host, self.server.port
                ))
            })
    }
}
