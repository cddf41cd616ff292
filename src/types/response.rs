//! The `{ data, meta }` response envelope and pagination metadata.

use serde::{Deserialize, Serialize};

/// Envelope for list endpoints: `{ data: [...], meta: { pagination } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope for single-resource endpoints: `{ data: {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page window over a larger result set, as reported by the backend.
///
/// Produced by the backend and consumed read-only; turning a page means a
/// fresh fetch with a different `pagination[page]`, never mutating this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub total: u64,
}

impl Pagination {
    /// `ceil(total / page_size)`; what `page_count` must equal when the
    /// backend reported both inputs.
    pub fn expected_page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let size = u64::from(self.page_size);
        ((self.total + size - 1) / size) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Clamp a requested page (e.g. parsed from a URL) into the valid range
    /// `1..=max(page_count, 1)`.
    pub fn clamp_page(requested: u32, page_count: u32) -> u32 {
        requested.max(1).min(page_count.max(1))
    }
}
