//! Generic query model for the engine's collection endpoints.
//!
//! [`FieldQuery`] bundles a predicate forest ([`FieldFilter`]), sort keys
//! ([`FieldSort`]) and paging. Filtering, sorting and counting all happen in
//! the engine; this module only renders the query onto the wire.

mod filter;
mod sort;

pub use filter::{FieldFilter, FilterType};
pub use sort::{FieldSort, SortDirection};

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

/// Filters, sort keys and paging for a collection request.
///
/// Top-level filters are combined with `And` by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldQuery {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FieldFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<FieldSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FieldQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, sort: FieldSort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }

    /// Free-text search, matched by the engine against the entity's searchable columns.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Zero-based page of `size` items.
    pub fn page(self, index: u32, size: u32) -> Self {
        self.skip(index.saturating_mul(size)).take(size)
    }

    /// Render the query as URL query parameters.
    ///
    /// `filters` and `sorts` are compact JSON arrays; the scalar parts are
    /// plain values. Absent parts produce no parameter at all.
    pub fn to_query_pairs(&self) -> CoreResult<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        if !self.filters.is_empty() {
            pairs.push(("filters".to_string(), serde_json::to_string(&self.filters)?));
        }
        if !self.sorts.is_empty() {
            pairs.push(("sorts".to_string(), serde_json::to_string(&self.sorts)?));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(take) = self.take {
            pairs.push(("take".to_string(), take.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        Ok(pairs)
    }
}

/// Render a bare filter list the way [`FieldQuery::to_query_pairs`] does.
pub fn filters_to_query_pairs(filters: &[FieldFilter]) -> CoreResult<Vec<(String, String)>> {
    if filters.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![("filters".to_string(), serde_json::to_string(filters)?)])
}
