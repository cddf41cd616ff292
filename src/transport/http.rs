use crate::query;
use crate::resolve::resolve_url;
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

/// Default freshness window handed to the embedding render layer.
const DEFAULT_REVALIDATE: Duration = Duration::from_secs(3600);

/// Per-request options merged over the transport defaults.
///
/// Header maps merge key-by-key with the caller winning on conflict; the
/// remaining fields are fully overridden when set.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HashMap<String, String>,
    /// Freshness window for the response. Not enforced on the wire;
    /// [`crate::CmsClient::request_cached`] uses it as the cache TTL.
    pub revalidate: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn revalidate(mut self, window: Duration) -> Self {
        self.revalidate = Some(window);
        self
    }
}

/// Thin GET transport over reqwest.
///
/// Owns the connection pool, the base origin, and the optional bearer token.
/// Performs no retries and no request deduplication; both belong to callers.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Result<Self> {
        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("CMS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(
                env::var("CMS_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("CMS_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET for `path` with the normalized form of `params`.
    ///
    /// Non-2xx responses become [`Error::Http`] with the status and raw body
    /// text; transport faults become [`Error::Transport`]. Both are logged
    /// before they propagate. The parsed JSON body is returned unchanged.
    pub async fn get(
        &self,
        path: &str,
        params: &Value,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let query_string = query::encode(params);
        let mut url = resolve_url(&self.base_url, path);
        if !query_string.is_empty() {
            url = format!("{}?{}", url, query_string);
        }

        let headers = self.merged_headers(options);
        let request_id = Uuid::new_v4();
        debug!(%url, %request_id, "cms request");

        let mut request = self.client.get(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = request.header("x-request-id", request_id.to_string());

        let response = request.send().await.map_err(|e| {
            error!(%url, %request_id, cause = %e, "cms fetch failed");
            Error::Transport(TransportError::Http(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%url, %request_id, status = status.as_u16(), %body, "cms error response");
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            error!(%url, %request_id, cause = %e, "cms response body unreadable");
            Error::Transport(TransportError::Http(e))
        })
    }

    /// Revalidation window for a request: caller's hint or the default.
    pub fn revalidate_window(&self, options: Option<&RequestOptions>) -> Duration {
        options
            .and_then(|o| o.revalidate)
            .unwrap_or(DEFAULT_REVALIDATE)
    }

    // Default headers first, then caller entries key-by-key on top.
    fn merged_headers(&self, options: Option<&RequestOptions>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        if let Some(token) = &self.api_token {
            headers.insert("authorization".to_string(), format!("Bearer {}", token));
        }
        if let Some(options) = options {
            for (name, value) in &options.headers {
                headers.insert(name.to_lowercase(), value.clone());
            }
        }
        headers
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
