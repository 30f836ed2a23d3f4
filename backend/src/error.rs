//! Failure types for the fetch → parse half of the pipeline.
//!
//! Validation failures live with the form ([`crate::form::ValidationError`])
//! and configuration failures with [`crate::config::ConfigError`].

/// Result type for a service round trip.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// The outbound call to the geocoding service failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// DNS, TCP or TLS failure before a response arrived.
    #[error("could not reach {url}: {message}")]
    Connect { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read the response from {url}: {message}")]
    Body { url: String, message: String },

    /// The HTTP client itself could not be set up.
    #[error("failed to build the HTTP client: {0}")]
    Client(String),
}

/// The service answered, but not with a usable result document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("the response contains no XML document")]
    Empty,

    #[error("result {index} has no <{field}> element")]
    MissingField { index: usize, field: &'static str },

    #[error("result {index} has a non-numeric <{field}>: {value:?}")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },
}

/// Either half of a service round trip failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl PipelineError {
    /// Message safe to show in a page. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(TransportError::Timeout { .. }) => {
                "The place search service did not answer in time. Please try again."
            }
            Self::Transport(_) => {
                "The place search service could not be reached. Please try again later."
            }
            Self::Parse(_) => "The place search service returned a response that could not be read.",
        }
    }
}
