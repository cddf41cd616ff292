//! Uploaded media entries.

use crate::resolve::resolve_url;
use serde::{Deserialize, Serialize};

/// A media upload as the CMS returns it, with the renditions the site reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default)]
    pub thumbnail: Option<MediaFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFormat {
    pub url: String,
}

impl Media {
    /// Absolute URL of the full-size asset.
    pub fn resolved_url(&self, base: &str) -> String {
        resolve_url(base, &self.url)
    }

    /// Absolute URL of the thumbnail rendition, falling back to the
    /// full-size asset when the backend generated none.
    pub fn thumbnail_url(&self, base: &str) -> String {
        let path = self
            .formats
            .as_ref()
            .and_then(|f| f.thumbnail.as_ref())
            .map(|t| t.url.as_str())
            .unwrap_or(&self.url);
        resolve_url(base, path)
    }
}
