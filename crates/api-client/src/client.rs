//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{
    CollectionsApi, LocalesApi, NavigationsApi, PagesApi, RedirectsApi, SiteApi, SitemapApi,
};
use crate::error::{ApiError, ApiResult};
use crate::response::FetchResult;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Brease API client
///
/// Wraps `reqwest` with bearer auth, a cache-control revalidation hint and
/// request correlation IDs. Every fetch resolves to a
/// [`FetchResult`](crate::response::FetchResult): transport failures, non-2xx
/// statuses and undecodable bodies are folded into the failure variant and
/// never surface as `Err`. There are deliberately no retries, no backoff and
/// no timeout beyond the transport's own defaults.
#[derive(Clone)]
pub struct BreaseClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl BreaseClient {
    /// Create a client from the process-wide environment configuration
    ///
    /// The configuration is resolved on first use and memoized for the
    /// process lifetime, see [`ClientConfig::global`].
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::global()?.clone();
        Self::with_config(config)
    }

    /// Create a client with a specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("brease-api-client/0.3"),
        );
        default_headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.token))
                .map_err(|_| ApiError::config("token contains non-header characters"))?,
        );
        default_headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_str(&format!("max-age={}", config.revalidate_secs))
                .map_err(|_| ApiError::config("revalidate_secs is not header-safe"))?,
        );

        let inner = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the site metadata endpoint
    #[must_use]
    pub fn site(&self) -> SiteApi {
        SiteApi::new(self.clone())
    }

    /// Access page endpoints
    #[must_use]
    pub fn pages(&self) -> PagesApi {
        PagesApi::new(self.clone())
    }

    /// Access collection endpoints
    #[must_use]
    pub fn collections(&self) -> CollectionsApi {
        CollectionsApi::new(self.clone())
    }

    /// Access navigation endpoints
    #[must_use]
    pub fn navigations(&self) -> NavigationsApi {
        NavigationsApi::new(self.clone())
    }

    /// Access the redirect table endpoint
    #[must_use]
    pub fn redirects(&self) -> RedirectsApi {
        RedirectsApi::new(self.clone())
    }

    /// Access the locale list endpoint
    #[must_use]
    pub fn locales(&self) -> LocalesApi {
        LocalesApi::new(self.clone())
    }

    /// Access sitemap endpoints
    #[must_use]
    pub fn sitemap(&self) -> SitemapApi {
        SitemapApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Fetch executor
    // -------------------------------------------------------------------------

    /// Issue a GET against `endpoint` and normalize the outcome
    ///
    /// `project` extracts the relevant sub-object from the decoded JSON
    /// envelope (every Brease response is `{"data": {...}}`) before the
    /// typed deserialization. There is no schema validation beyond the serde
    /// derives; the backend's shape contract is a trust boundary.
    #[instrument(skip(self, project), fields(request_id))]
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        project: impl FnOnce(Value) -> Value,
    ) -> FetchResult<T> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());
        let started = Instant::now();

        let response = match self
            .inner
            .get(endpoint)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "transport failure");
                return FetchResult::failure(e.to_string(), 500, Some(endpoint.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            warn!(endpoint = %endpoint, status = status.as_u16(), "non-success status");
            return FetchResult::failure(
                format!("{endpoint} returned {} {reason}", status.as_u16()),
                status.as_u16(),
                Some(endpoint.to_string()),
            );
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "malformed response body");
                return FetchResult::failure(e.to_string(), 500, Some(endpoint.to_string()));
            }
        };

        match serde_json::from_value::<T>(project(body)) {
            Ok(data) => {
                debug!(
                    endpoint = %endpoint,
                    status = status.as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "request succeeded"
                );
                FetchResult::success(data, status.as_u16())
            }
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "undecodable payload");
                FetchResult::failure(
                    format!("failed to decode response body: {e}"),
                    500,
                    Some(endpoint.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("https://api.brease.io/v1", "test-token", "prod", "en")
    }

    #[test]
    fn client_creation() {
        let client = BreaseClient::with_config(config());
        assert!(client.is_ok());
    }

    #[test]
    fn client_rejects_invalid_config() {
        let bad = ClientConfig::new("not-a-url", "t", "prod", "en");
        assert!(BreaseClient::with_config(bad).is_err());
    }

    #[test]
    fn unreachable_host_folds_into_failure() {
        // Port 9 (discard) on localhost is not listening; the connect error
        // must come back as data, not as Err or a panic.
        let config = ClientConfig::new("http://127.0.0.1:9/v1", "t", "prod", "en");
        let client = BreaseClient::with_config(config).unwrap();
        let result: FetchResult<Value> = tokio_test::block_on(
            client.fetch("http://127.0.0.1:9/v1/environments/prod/site", |v| v),
        );
        match result {
            FetchResult::Failure {
                status, endpoint, ..
            } => {
                assert_eq!(status, 500);
                assert!(endpoint.unwrap().contains("/environments/prod/site"));
            }
            FetchResult::Success { .. } => panic!("expected transport failure"),
        }
    }
}
