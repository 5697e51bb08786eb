//! Errors returned by [`crate::ApiClient`].

use stockdesk_core::models::EnvelopeError;
use stockdesk_core::validation::FieldErrors;
use thiserror::Error;

/// Errors that can occur when talking to the inventory backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Backend answered `{"success": false}`.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Backend answered `{"success": true}` without `data`.
    #[error("Response contained no data")]
    MissingData,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid API token.
    #[error("Unauthorized: check STOCKDESK_API_TOKEN")]
    Unauthorized,

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A form failed validation; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
}

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(message) => Self::Rejected(message),
            EnvelopeError::MissingData => Self::MissingData,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ApiError {
    /// Message suitable for a one-line notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => "The server took too long to respond".to_string(),
            Self::Http(_) => "Could not reach the server".to_string(),
            Self::Api { status, .. } if *status >= 500 => "The server had a problem".to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Validation(errors) => format!("Please fix: {errors}"),
            other => other.to_string(),
        }
    }
}
