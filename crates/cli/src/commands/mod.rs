//! One module per command group.

pub mod customers;
pub mod dashboard;
pub mod expenses;
pub mod pre_orders;
pub mod products;
pub mod sales;
pub mod users;

use serde::Serialize;
use stockdesk_client::{ApiError, ConfigError};
use thiserror::Error;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CommandError {
    /// One line for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// How reports are written to the log.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// In JSON mode, log `value` as one event and return `true`; the caller
    /// then skips its line-by-line rendering.
    pub fn json<T: Serialize>(self, kind: &str, value: &T) -> Result<bool, CommandError> {
        if !self.json {
            return Ok(false);
        }
        let report = serde_json::to_string(value)?;
        tracing::info!(kind, %report, "report");
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stockdesk_core::validation::FieldErrors;

    use super::*;

    #[test]
    fn test_text_mode_skips_json() {
        assert!(!Output::new(false).json("products", &[1, 2, 3]).unwrap());
        assert!(Output::new(true).json("products", &[1, 2, 3]).unwrap());
    }

    #[test]
    fn test_user_message_uses_api_wording() {
        let mut errors = FieldErrors::new();
        errors.insert("price", "Price must be greater than 0");
        let err = CommandError::from(ApiError::from(errors));
        assert_eq!(err.user_message(), "Please fix: price: Price must be greater than 0");

        let err = CommandError::from(ConfigError::MissingEnvVar("STOCKDESK_API_URL".into()));
        assert_eq!(
            err.user_message(),
            "Configuration error: Missing environment variable: STOCKDESK_API_URL"
        );
    }
}
