//! HTTP plumbing shared by every resource.

use std::sync::Arc;

use moka::future::Cache;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use stockdesk_core::models::Envelope;
use tracing::debug;
use url::Url;

use crate::cache::{CacheKey, CacheValue};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Inventory backend client.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Option<Cache<CacheKey, CacheValue>>,
    low_stock_threshold: u32,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(bearer) = config.bearer() {
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|e| ApiError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let cache = (!config.cache_ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(16)
                .time_to_live(config.cache_ttl)
                .build()
        });

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                cache,
                low_stock_threshold: config.low_stock_threshold,
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Quantity at or below which a product counts as low stock.
    #[must_use]
    pub fn low_stock_threshold(&self) -> u32 {
        self.inner.low_stock_threshold
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Parse(format!("Invalid request path {path:?}: {e}")))
    }

    /// GET `path` and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.inner.client.get(self.url(path)?).send().await?;
        self.unwrap_envelope::<T>(path, response).await?.into_result().map_err(Into::into)
    }

    /// POST a JSON body to `path` and unwrap the envelope.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self
            .inner
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await?;
        self.unwrap_envelope::<T>(path, response).await?.into_result().map_err(Into::into)
    }

    /// PUT a JSON body to `path` and unwrap the envelope.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let response = self
            .inner
            .client
            .put(self.url(path)?)
            .json(body)
            .send()
            .await?;
        self.unwrap_envelope::<T>(path, response).await?.into_result().map_err(Into::into)
    }

    /// DELETE `path`. A missing `data` field is fine here.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.inner.client.delete(self.url(path)?).send().await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(());
        }
        self.unwrap_envelope::<serde_json::Value>(path, response)
            .await?
            .into_ack()?;
        Ok(())
    }

    /// Turn a response into an envelope, or into an error for non-2xx statuses.
    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::parse_error(path, response).await);
        }

        // Read as text first so parse failures can say what came back.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::Parse(format!(
                "Failed to parse {path} response: {e} (body: {})",
                truncate(&body, 200)
            ))
        })
    }

    /// Map a non-2xx response onto an [`ApiError`].
    async fn parse_error(path: &str, response: reqwest::Response) -> ApiError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return ApiError::RateLimited(retry_after);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ApiError::Unauthorized;
        }

        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound(path.to_string());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        // Validation failures usually still come wrapped in the envelope.
        if status.is_client_error() {
            if let Ok(Envelope {
                message: Some(message),
                ..
            }) = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
            {
                return ApiError::Rejected(message);
            }
        }

        ApiError::Api {
            status: status.as_u16(),
            message: truncate(&body, 500).to_string(),
        }
    }

    pub(crate) async fn cached(&self, key: CacheKey) -> Option<CacheValue> {
        match &self.inner.cache {
            Some(cache) => cache.get(&key).await,
            None => None,
        }
    }

    pub(crate) async fn store(&self, key: CacheKey, value: CacheValue) {
        if let Some(cache) = &self.inner.cache {
            cache.insert(key, value).await;
        }
    }

    pub(crate) async fn invalidate(&self, key: CacheKey) {
        if let Some(cache) = &self.inner.cache {
            cache.invalidate(&key).await;
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("cached", &self.inner.cache.is_some())
            .finish_non_exhaustive()
    }
}

/// Cut `s` to at most `max` bytes on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.get(..end).unwrap_or(s)
}
