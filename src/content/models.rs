//! Collection models, typed to what the pages read.

use crate::types::Media;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// News article (`/api/beritas` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub thumbnail: Option<Media>,
    /// Rich-text body blocks; passed through for the renderer.
    #[serde(default)]
    pub text_content: Value,
    #[serde(default)]
    pub date_published: Option<String>,
}

/// Photo gallery single type (`/api/gallery`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub photos: Vec<Media>,
}

/// What the home page shows: the profile document and the gallery.
#[derive(Debug, Clone)]
pub struct HomeData {
    pub profile: Value,
    pub gallery: Gallery,
}

/// The two demographic infographic documents. Their field sets are wide and
/// chart-shaped (age bands, hamlet counts, education, occupations); the
/// charts consume them directly, so they pass through untyped.
#[derive(Debug, Clone)]
pub struct Infographics {
    pub population: Value,
    pub education: Value,
}
