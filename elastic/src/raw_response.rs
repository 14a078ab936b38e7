//! Typed envelope for the backend's raw search response.
//!
//! Only the fields the decoder consumes are modeled; everything else in the
//! response (`took`, `timed_out`, per-hit scores) is ignored. Aggregation
//! bodies stay as raw JSON because their shape depends on the aggregation
//! kind and is classified by content during decoding.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct RawSearchResult {
    pub hits: RawSearchResultHits,
    #[serde(default)]
    pub aggregations: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawSearchResultHits {
    pub total: RawTotalHits,
    pub hits: Vec<RawSearchResultHit>,
}

#[derive(Debug, Deserialize)]
pub struct RawTotalHits {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub struct RawSearchResultHit {
    /// Docvalue fields, each a list of values.
    pub fields: Map<String, Value>,
}
