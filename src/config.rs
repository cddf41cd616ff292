//! Environment configuration, read once at first use.
//!
//! The builder on [`crate::CmsClient`] takes precedence over everything here;
//! these are the process-wide defaults. There is no hot reload; changing the
//! environment after the first read has no effect.

use once_cell::sync::Lazy;
use std::env;

/// Fallback origin for local development against a default Strapi install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

static BASE_URL: Lazy<String> =
    Lazy::new(|| env::var("CMS_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()));

static API_TOKEN: Lazy<Option<String>> = Lazy::new(|| env::var("CMS_API_TOKEN").ok());

/// Base origin of the CMS backend (`CMS_URL`).
pub fn base_url() -> &'static str {
    &BASE_URL
}

/// Optional bearer token for the content API (`CMS_API_TOKEN`).
pub fn api_token() -> Option<&'static str> {
    API_TOKEN.as_deref()
}
