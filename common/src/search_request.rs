//! Shared search request model.

use serde::{Deserialize, Serialize};

use crate::search_filter::Filter;


/// One page of a faceted search, as assembled by the caller.
///
/// Filter order determines facet display order. Filters are keyed by `code`
/// when the query is compiled: a later filter with the same code silently
/// replaces an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchRequest {
    pub filters: Vec<Filter>,
    /// 1-based page number.
    pub current_page: u64,
    pub page_size: u64,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Logical field code; mapped to the backend field name at compile time.
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
