//! Typed operations for the site's content collections.
//!
//! Mirrors the pages of the village website: the news index and article
//! pages, the photo gallery, the village profile, and the demographic
//! infographics. Each operation builds its query with [`crate::Query`] and
//! deserializes the envelope at the edge; nothing beyond what the pages
//! actually read is validated.
//!
//! All operations return `Result`; substituting an empty shape when a fetch
//! fails is page-level policy, not this layer's.

mod models;
mod ops;

pub use models::{Article, Gallery, HomeData, Infographics};
pub use ops::{ARTICLES_PAGE_SIZE, RECENT_ARTICLES_LIMIT};
