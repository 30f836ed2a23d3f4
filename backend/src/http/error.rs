//! HTTP error handling. Every failure is answered with an HTML page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::PipelineError;
use crate::form::{SearchForm, ValidationError};
use crate::render::page::{error_page, results_page, search_form_page};
use crate::render::{ResultTable, TableKind};

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request parameters
    BadRequest(String),
    /// The search form did not validate; it is shown again with the message
    Validation {
        form: Box<SearchForm>,
        error: ValidationError,
    },
    /// The geocoding service round trip failed
    Upstream {
        heading: String,
        kind: TableKind,
        error: PipelineError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match self {
            AppError::BadRequest(msg) => error_page("Bad request", &msg),
            AppError::Validation { form, error } => search_form_page(&form, Some(&error)),
            AppError::Upstream {
                heading,
                kind,
                error,
            } => {
                tracing::warn!(error = %error, "Place search service round trip failed");
                match error {
                    // The service answered, so show the (empty) result view.
                    PipelineError::Parse(_) => results_page(
                        &heading,
                        &ResultTable::empty(kind),
                        Some(error.user_message()),
                    ),
                    PipelineError::Transport(_) => {
                        error_page("Service unavailable", error.user_message())
                    }
                }
            }
        };

        (status, Html(page.into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, TransportError};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation {
                form: Box::default(),
                error: ValidationError::MissingPlaceName,
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Upstream {
                heading: String::new(),
                kind: TableKind::Search,
                error: ParseError::Empty.into(),
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_transport_failure_response() {
        let response = AppError::Upstream {
            heading: "Search results for \"x\":".into(),
            kind: TableKind::Search,
            error: TransportError::Status {
                url: "http://svc".into(),
                status: 503,
            }
            .into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
