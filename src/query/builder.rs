//! Fluent builder for CMS query options.

use serde_json::{Map, Value};

/// Sort direction for [`Query::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Filter operators understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `$eq`
    Eq,
    /// `$ne`
    Ne,
    /// `$contains`
    Contains,
}

impl FilterOp {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Ne => "$ne",
            FilterOp::Contains => "$contains",
        }
    }
}

/// Builder for the nested options structure the content API accepts.
///
/// Keys are emitted in the order they were added, so two identically built
/// queries encode identically (and share a cache key).
///
/// ```rust
/// use desa_cms_client::{FilterOp, Query, SortDirection};
///
/// let query = Query::new()
///     .sort("datePublished", SortDirection::Desc)
///     .filter("slug", FilterOp::Ne, "peresmian-balai")
///     .populate("thumbnail")
///     .paginate(2, 6);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Map<String, Value>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by `field`; repeated calls add fields to the same `sort` mapping.
    pub fn sort(mut self, field: &str, direction: SortDirection) -> Self {
        let sort = self
            .params
            .entry("sort")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = sort {
            map.insert(field.to_string(), Value::String(direction.as_str().into()));
        }
        self
    }

    /// Populate a relation (`"thumbnail"`, `"photos"`) or everything (`"*"`).
    pub fn populate(mut self, relation: &str) -> Self {
        self.params
            .insert("populate".to_string(), Value::String(relation.to_string()));
        self
    }

    /// Add a field condition; conditions on distinct fields accumulate under
    /// the same `filters` mapping.
    pub fn filter(mut self, field: &str, op: FilterOp, value: impl Into<Value>) -> Self {
        let filters = self
            .params
            .entry("filters")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = filters {
            let condition = map
                .entry(field.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(condition) = condition {
                condition.insert(op.as_str().to_string(), value.into());
            }
        }
        self
    }

    /// Page-window pagination (`pagination[page]`, `pagination[pageSize]`).
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        let mut pagination = Map::new();
        pagination.insert("page".to_string(), Value::from(page));
        pagination.insert("pageSize".to_string(), Value::from(page_size));
        self.params
            .insert("pagination".to_string(), Value::Object(pagination));
        self
    }

    /// Offset-free truncation (`pagination[limit]`), used by sidebars.
    pub fn limit(mut self, limit: u32) -> Self {
        let mut pagination = Map::new();
        pagination.insert("limit".to_string(), Value::from(limit));
        self.params
            .insert("pagination".to_string(), Value::Object(pagination));
        self
    }

    /// Escape hatch for parameters the builder has no verb for.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The nested options value this builder accumulated.
    pub fn into_value(self) -> Value {
        Value::Object(self.params)
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        query.into_value()
    }
}
