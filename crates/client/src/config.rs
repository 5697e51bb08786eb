//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOCKDESK_API_URL` - Base URL of the inventory backend (e.g. `https://api.example.com/api/v1`)
//!
//! ## Optional
//! - `STOCKDESK_API_TOKEN` - Bearer token sent with every request
//! - `STOCKDESK_TIMEOUT_SECS` - Request timeout (default: 30)
//! - `STOCKDESK_CACHE_TTL_SECS` - Reference list cache TTL, 0 disables (default: 300)
//! - `STOCKDESK_LOW_STOCK_THRESHOLD` - Quantity at or below which stock is low (default: 5)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Values copied from `.env.example` files that were never replaced.
const PLACEHOLDER_PATTERNS: &[&str] = &["your-", "changeme", "replace", "placeholder", "xxx"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Backend client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are appended to it
    pub api_url: Url,
    /// Bearer token (optional, some deployments are open on the LAN)
    pub api_token: Option<SecretString>,
    pub timeout: Duration,
    /// Zero disables the reference list cache
    pub cache_ttl: Duration,
    pub low_stock_threshold: u32,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("cache_ttl", &self.cache_ttl)
            .field("low_stock_threshold", &self.low_stock_threshold)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_url` with every default applied.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not an absolute http(s) URL.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url(api_url)?,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the token looks like an unreplaced placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = get("STOCKDESK_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("STOCKDESK_API_URL".to_string()))?;
        let mut config = Self::new(&api_url)?;

        if let Some(token) = get("STOCKDESK_API_TOKEN") {
            validate_token(&token, "STOCKDESK_API_TOKEN")?;
            config.api_token = Some(SecretString::from(token));
        }
        if let Some(secs) = get("STOCKDESK_TIMEOUT_SECS") {
            let secs = parse_number::<u64>("STOCKDESK_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(ConfigError::InvalidEnvVar(
                    "STOCKDESK_TIMEOUT_SECS".to_string(),
                    "must be at least 1".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = get("STOCKDESK_CACHE_TTL_SECS") {
            config.cache_ttl =
                Duration::from_secs(parse_number("STOCKDESK_CACHE_TTL_SECS", &secs)?);
        }
        if let Some(threshold) = get("STOCKDESK_LOW_STOCK_THRESHOLD") {
            config.low_stock_threshold = parse_number("STOCKDESK_LOW_STOCK_THRESHOLD", &threshold)?;
        }

        Ok(config)
    }

    /// Value for the `Authorization` header, if a token is configured.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.api_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret()))
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("STOCKDESK_API_URL".to_string(), reason);

    // A trailing slash makes `Url::join` append instead of replacing the last segment.
    let normalized = if raw.ends_with('/') {
        raw.trim().to_string()
    } else {
        format!("{}/", raw.trim())
    };
    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(**p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("looks like a placeholder (contains {pattern:?})"),
        ));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "contains whitespace".to_string(),
        ));
    }
    Ok(())
}
