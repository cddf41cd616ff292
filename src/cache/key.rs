//! Cache key derivation.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Cache key for a request.
///
/// Derived from the path plus the normalized query string, digested so keys
/// stay uniform regardless of query length. The query normalizer's ordering
/// guarantee makes this deterministic: the same request descriptor always
/// hashes to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    hash: String,
    path: Option<String>,
}

impl CacheKey {
    /// Key for `path` with the given nested query options.
    pub fn for_request(path: &str, params: &Value) -> Self {
        let canonical = format!("{}?{}", path, crate::query::encode(params));
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        Self {
            hash,
            path: Some(path.to_string()),
        }
    }

    /// Key from a literal string, used for prefixing and in tests.
    pub fn raw(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            path: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Request path this key was derived from, when known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_request_same_key() {
        let params = json!({"pagination": {"page": 1, "pageSize": 6}});
        let a = CacheKey::for_request("/api/beritas", &params);
        let b = CacheKey::for_request("/api/beritas", &params);
        assert_eq!(a, b);
    }

    #[test]
    fn different_page_different_key() {
        let a = CacheKey::for_request("/api/beritas", &json!({"pagination": {"page": 1}}));
        let b = CacheKey::for_request("/api/beritas", &json!({"pagination": {"page": 2}}));
        assert_ne!(a, b);
    }

    #[test]
    fn different_path_different_key() {
        let empty = json!({});
        let a = CacheKey::for_request("/api/gallery", &empty);
        let b = CacheKey::for_request("/api/infographic", &empty);
        assert_ne!(a, b);
        assert_eq!(a.path(), Some("/api/gallery"));
    }
}
