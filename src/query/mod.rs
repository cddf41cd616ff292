//! Query normalization for the CMS content API.
//!
//! The backend expects nested parameter structures flattened into the
//! bracketed-key convention: `{filters: {slug: {$eq: "x"}}}` becomes the pair
//! `filters[slug][$eq]=x`, and sequences use their index as the key segment
//! (`tags[0]=a&tags[1]=b`).
//!
//! [`encode`] and [`pairs`] operate on any `serde_json::Value`; [`Query`] is
//! the fluent way to build the structures the site's call sites need (sort,
//! populate, filters, pagination).

mod builder;
mod encode;

pub use builder::{FilterOp, Query, SortDirection};
pub use encode::{encode, pairs};
