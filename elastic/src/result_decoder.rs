//! Decodes the backend's raw response into a normalized search result.

use std::collections::BTreeSet;

use common::search_filter::Filter;
use common::search_request::SearchRequest;
use common::search_result::{Facet, FacetOption, OptionsFacet, RangeFacet, SearchResult};
use serde_json::{Map, Value};

use crate::error::SearchError;
use crate::raw_response::RawSearchResult;
use crate::search_const::{AGG_KEY_SUFFIX, FILTERED_AGG_KEY, ID_FIELD};

/// Decode a raw backend response against the request that produced it.
///
/// Aggregations that yielded no data are skipped without consuming a facet
/// position; a response missing an expected key or shape fails with
/// [`SearchError::MalformedResponse`].
pub fn decode(raw: Value, request: &SearchRequest) -> Result<SearchResult, SearchError> {
    let raw: RawSearchResult =
        serde_json::from_value(raw).map_err(|e| SearchError::malformed(e.to_string()))?;

    let mut ids = Vec::with_capacity(raw.hits.hits.len());
    for hit in &raw.hits.hits {
        ids.push(hit_id(&hit.fields)?);
    }

    let mut facets: Vec<Facet> = Vec::new();
    for (key, body) in &raw.aggregations {
        let code = key.strip_suffix(AGG_KEY_SUFFIX).unwrap_or(key.as_str());
        match decode_facet(code, body, request, facets.len() as u64)? {
            Some(facet) => facets.push(facet),
            None => tracing::debug!(code, "facet skipped: aggregation yielded no data"),
        }
    }

    Ok(SearchResult {
        total: raw.hits.total.value,
        current_page: request.current_page,
        page_size: request.page_size,
        ids,
        facets,
    })
}

fn hit_id(fields: &Map<String, Value>) -> Result<String, SearchError> {
    fields
        .get(ID_FIELD)
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SearchError::malformed(format!("hit without a `{ID_FIELD}` docvalue")))
}

fn decode_facet(
    code: &str,
    body: &Value,
    request: &SearchRequest,
    position: u64,
) -> Result<Option<Facet>, SearchError> {
    // option facets arrive wrapped in the filtered sub-aggregation; range
    // facets are bare statistics
    let effective = body
        .get(FILTERED_AGG_KEY)
        .and_then(|filtered| filtered.get(code))
        .unwrap_or(body);

    // a minimum of exactly zero is indistinguishable from "no data" here;
    // see zero_min_statistics_skipped before changing this
    if let Some(min) = effective.get("min").and_then(Value::as_f64)
        && min != 0.0
    {
        let max = effective.get("max").and_then(Value::as_f64).ok_or_else(|| {
            SearchError::malformed(format!("facet `{code}`: statistics without a numeric `max`"))
        })?;
        return Ok(Some(Facet::Range(RangeFacet {
            code: code.to_string(),
            position,
            is_in_use: false,
            min,
            max,
        })));
    }

    let buckets = effective
        .get("buckets")
        .and_then(Value::as_array)
        .filter(|buckets| !buckets.is_empty());
    let Some(buckets) = buckets else {
        return Ok(None);
    };

    let raw_options = buckets
        .iter()
        .map(|bucket| decode_bucket(code, bucket))
        .collect::<Result<Vec<_>, _>>()?;
    let selection = apply_selection(raw_options, selected_values(request, code));

    Ok(Some(Facet::Options(OptionsFacet {
        code: code.to_string(),
        position,
        is_in_use: selection.is_in_use,
        options: selection.options,
    })))
}

fn decode_bucket(code: &str, bucket: &Value) -> Result<(String, u64), SearchError> {
    let value = match bucket.get("key") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(SearchError::malformed(format!(
                "facet `{code}`: bucket key is neither string nor number"
            )));
        }
    };
    let count = bucket
        .get("doc_count")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            SearchError::malformed(format!("facet `{code}`: bucket without `doc_count`"))
        })?;
    Ok((value, count))
}

/// Selected values of the filter governing this facet, if it is an options
/// filter. With duplicate codes the last occurrence wins, consistent with
/// clause compilation.
fn selected_values<'a>(request: &'a SearchRequest, code: &str) -> Option<&'a BTreeSet<String>> {
    request
        .filters
        .iter()
        .rev()
        .find(|f| f.code() == code)
        .and_then(|f| match f {
            Filter::Options(f) => Some(&f.values),
            _ => None,
        })
}

struct AppliedSelection {
    options: Vec<FacetOption>,
    is_in_use: bool,
}

fn apply_selection(
    raw: Vec<(String, u64)>,
    selected: Option<&BTreeSet<String>>,
) -> AppliedSelection {
    let mut is_in_use = false;
    let options = raw
        .into_iter()
        .map(|(value, count)| {
            let applied = selected.is_some_and(|values| values.contains(&value));
            is_in_use |= applied;
            FacetOption {
                value,
                count,
                applied,
            }
        })
        .collect();
    AppliedSelection { options, is_in_use }
}
