//! The client proper.

use crate::cache::{CacheKey, CacheManager, Lookup};
use crate::client::CmsClientBuilder;
use crate::transport::{HttpTransport, RequestOptions};
use crate::Result;
use serde_json::Value;
use tracing::warn;

/// Client for the village CMS content API.
///
/// Owns its transport and its cache; two clients share nothing. Raw access
/// goes through [`Self::request`] and friends; the typed collection
/// operations live in [`crate::content`].
pub struct CmsClient {
    transport: HttpTransport,
    cache: CacheManager,
}

impl std::fmt::Debug for CmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsClient")
            .field("base_url", &self.transport.base_url())
            .finish_non_exhaustive()
    }
}

impl CmsClient {
    pub(crate) fn new(transport: HttpTransport, cache: CacheManager) -> Self {
        Self { transport, cache }
    }

    pub fn builder() -> CmsClientBuilder {
        CmsClientBuilder::new()
    }

    /// Client configured entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// GET `path` with the given nested query options; the parsed JSON body
    /// comes back unchanged. Always goes to the network.
    pub async fn request(&self, path: &str, params: &Value) -> Result<Value> {
        self.transport.get(path, params, None).await
    }

    /// [`Self::request`] with caller options merged over the defaults.
    pub async fn request_with(
        &self,
        path: &str,
        params: &Value,
        options: &RequestOptions,
    ) -> Result<Value> {
        self.transport.get(path, params, Some(options)).await
    }

    /// Cache-first request: a valid cached entry is returned without
    /// touching the network; on a miss the response is fetched and stored
    /// under the request's key. The entry's TTL is the options' revalidate
    /// window (one hour when unset).
    ///
    /// Failed fetches are never cached, and a cache-store failure downgrades
    /// to a warning and the fresh response still reaches the caller.
    ///
    /// Concurrent misses for the same key each fetch; there is no in-flight
    /// coalescing. Responses are idempotent per key within their TTL, so
    /// last-write-wins is harmless.
    pub async fn request_cached(
        &self,
        path: &str,
        params: &Value,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let key = CacheKey::for_request(path, params);
        if let Lookup::Hit(value) = self.cache.lookup::<Value>(&key).await {
            return Ok(value);
        }

        let fresh = self.transport.get(path, params, options).await?;

        let ttl = self.transport.revalidate_window(options);
        if let Err(e) = self.cache.set_with_ttl(&key, &fresh, ttl).await {
            warn!(path, cause = %e, "response not cached");
        }

        Ok(fresh)
    }
}
