//! # desa-cms-client
//!
//! Typed async client runtime for the village CMS content API. The backend is
//! a headless CMS speaking the Strapi conventions: bracketed nested query
//! keys, `{ data, meta.pagination }` envelopes, bearer-token auth.
//!
//! ## Overview
//!
//! This library owns the data layer of the village website: building request
//! URLs and query strings, issuing the HTTP calls, caching responses for a
//! session, and exposing typed operations for the collections the site
//! displays (news articles, photo gallery, village profile, demographic
//! infographics).
//!
//! ## Core Philosophy
//!
//! - **Thin over the wire**: responses are returned as parsed JSON, unchanged
//!   and unvalidated; typing happens at the edge, per collection.
//! - **Owned state**: the cache belongs to the client instance you build.
//!   There is no module-level singleton to reset between tests.
//! - **Errors surface**: every failure is logged, then propagated. Recovery
//!   (fallback content, defaults) is the caller's decision.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use desa_cms_client::CmsClient;
//!
//! #[tokio::main]
//! async fn main() -> desa_cms_client::Result<()> {
//!     let client = CmsClient::builder()
//!         .base_url("https://cms.desagayabaru.id")
//!         .build()?;
//!
//!     let page = client.articles(1).await?;
//!     for article in &page.data {
//!         println!("{} ({})", article.title, article.slug);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resolve`] | Absolute-URL resolution against the configured origin |
//! | [`query`] | Bracketed-key query encoding and the [`Query`] builder |
//! | [`transport`] | HTTP transport (headers, auth, error mapping) |
//! | [`cache`] | Session cache with per-entry TTL |
//! | [`client`] | [`CmsClient`] and its builder |
//! | [`types`] | Response envelope, pagination, media |
//! | [`content`] | Typed collection operations |

pub mod cache;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod query;
pub mod resolve;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{CmsClient, CmsClientBuilder};
pub use content::{Article, Gallery, HomeData, Infographics};
pub use query::{FilterOp, Query, SortDirection};
pub use resolve::resolve_url;
pub use transport::RequestOptions;
pub use types::{Document, ListResponse, Media, Pagination};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
