//! Client construction.

use crate::cache::{CacheBackend, CacheConfig, CacheManager, MemoryCache};
use crate::client::CmsClient;
use crate::config;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::time::Duration;

/// Builder for [`CmsClient`].
///
/// Everything defaults from the environment ([`crate::config`]); explicit
/// setters win. Tests inject a mock server through [`Self::base_url`] and
/// substitute cache backends through [`Self::cache_backend`].
pub struct CmsClientBuilder {
    base_url: Option<String>,
    api_token: Option<String>,
    cache_config: CacheConfig,
    cache_backend: Option<Box<dyn CacheBackend>>,
}

impl CmsClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            cache_config: CacheConfig::default(),
            cache_backend: None,
        }
    }

    /// Override the backend origin (default: `CMS_URL`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the bearer token (default: `CMS_API_TOKEN`).
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Default TTL for cached responses.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_config = self.cache_config.with_ttl(ttl);
        self
    }

    /// Turn response caching off entirely.
    pub fn cache_disabled(mut self) -> Self {
        self.cache_config = self.cache_config.with_enabled(false);
        self
    }

    pub fn cache_max_entries(mut self, max_entries: usize) -> Self {
        self.cache_config = self.cache_config.with_max_entries(max_entries);
        self
    }

    /// Substitute the cache storage (default: in-memory).
    pub fn cache_backend(mut self, backend: Box<dyn CacheBackend>) -> Self {
        self.cache_backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<CmsClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::base_url().to_string());
        if base_url.is_empty() {
            return Err(Error::configuration("base URL must not be empty"));
        }
        // trailing slash would double up with the leading slash of API paths
        let base_url = base_url.trim_end_matches('/').to_string();

        let api_token = self
            .api_token
            .or_else(|| config::api_token().map(str::to_string));

        let transport = HttpTransport::new(base_url, api_token)?;
        let backend = self
            .cache_backend
            .unwrap_or_else(|| Box::new(MemoryCache::new(self.cache_config.max_entries)));
        let cache = CacheManager::new(self.cache_config, backend);

        Ok(CmsClient::new(transport, cache))
    }
}

impl Default for CmsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
