//! Compiles a search request into the backend query/aggregation document.

use common::search_filter::Filter;
use common::search_request::SearchRequest;
use serde_json::{Map, Value, json};

use crate::error::SearchError;
use crate::search_const::{
    AGG_KEY_SUFFIX, FACET_TERMS_LIMIT, FILTERED_AGG_KEY, ID_FIELD, SCORE_FIELD, STORED_FIELDS_NONE,
};

/// Caller-supplied mapping from a logical field code to the backend's
/// physical field name. Must be side-effect-free; `None` means identity.
pub type FieldMapper<'a> = &'a dyn Fn(&str) -> String;

/// Build the full query document: paging, sort, filter clauses and one
/// aggregation per facetable filter.
pub fn compile(
    request: &SearchRequest,
    map_field: Option<FieldMapper>,
) -> Result<Value, SearchError> {
    let mapped = |code: &str| -> String {
        match map_field {
            Some(f) => f(code),
            None => code.to_string(),
        }
    };

    let from = request.current_page.saturating_sub(1) * request.page_size;

    let sort = match &request.order {
        Some(order) => {
            json!([{ mapped(&order.field): { "order": order.direction.as_str() } }])
        }
        None => json!([]),
    };

    // One clause per non-empty filter, keyed by code. A later filter with the
    // same code replaces the earlier clause but keeps its slot, so the final
    // `must` order is map order, not request order.
    let mut must: Map<String, Value> = Map::new();
    for filter in &request.filters {
        if filter.is_empty() {
            continue;
        }
        must.insert(filter.code().to_string(), filter_clause(filter, &mapped)?);
    }

    let mut aggregations: Map<String, Value> = Map::new();
    for filter in &request.filters {
        if !filter.is_facetable() {
            continue;
        }
        let agg = facet_aggregation(filter, &must, &mapped)?;
        aggregations.insert(format!("{}{}", filter.code(), AGG_KEY_SUFFIX), agg);
    }

    tracing::debug!(
        clauses = must.len(),
        facets = aggregations.len(),
        "compiled search query"
    );

    let must: Vec<Value> = must.into_iter().map(|(_, clause)| clause).collect();
    Ok(json!({
        "from": from,
        "size": request.page_size,
        "stored_fields": STORED_FIELDS_NONE,
        "docvalue_fields": [ID_FIELD, SCORE_FIELD],
        "sort": sort,
        "query": { "bool": { "must": must } },
        "aggregations": aggregations,
    }))
}

fn filter_clause(filter: &Filter, mapped: &impl Fn(&str) -> String) -> Result<Value, SearchError> {
    match filter {
        Filter::Options(f) => Ok(json!({ "terms": { mapped(&f.code): &f.values } })),
        Filter::Range(f) => {
            let mut bounds: Map<String, Value> = Map::new();
            if let Some(from) = f.from {
                bounds.insert("gte".to_string(), json!(from));
            }
            if let Some(to) = f.to {
                bounds.insert("lte".to_string(), json!(to));
            }
            Ok(json!({ "range": { mapped(&f.code): bounds } }))
        }
        other => Err(SearchError::unsupported(other.code())),
    }
}

fn facet_aggregation(
    filter: &Filter,
    must: &Map<String, Value>,
    mapped: &impl Fn(&str) -> String,
) -> Result<Value, SearchError> {
    match filter {
        Filter::Options(f) => {
            // count this facet as if its own filter were not applied, so
            // selecting one option does not hide its siblings; every other
            // active filter still constrains the population
            let siblings: Vec<Value> = must
                .iter()
                .filter(|(code, _)| code.as_str() != f.code)
                .map(|(_, clause)| clause.clone())
                .collect();
            Ok(json!({
                "global": {},
                "aggs": {
                    FILTERED_AGG_KEY: {
                        "filter": { "bool": { "filter": siblings } },
                        "aggs": {
                            f.code.as_str(): {
                                "terms": { "field": mapped(&f.code), "size": FACET_TERMS_LIMIT }
                            }
                        }
                    }
                }
            }))
        }
        // statistics run on the full unfiltered population; sibling filters
        // are NOT applied here, unlike option facets
        Filter::Range(f) => Ok(json!({ "extended_stats": { "field": mapped(&f.code) } })),
        other => Err(SearchError::unsupported(other.code())),
    }
}
