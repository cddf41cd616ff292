//! Absolute-URL resolution against the CMS origin.
//!
//! Media entries in CMS payloads carry either relative upload paths
//! (`/uploads/foto.jpg`) or, for externally hosted assets, full URLs. Display
//! code should not need to care which it got.

/// Resolve a possibly-relative media or API path into an absolute URL.
///
/// Inputs that already start with `http://` or `https://` pass through
/// unchanged, so resolving twice is a no-op. Everything else is prefixed
/// with `base` exactly once. The path is not validated; a malformed path
/// fails naturally at the HTTP layer.
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", base, path)
}
