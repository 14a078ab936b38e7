//! Normalized search result and facet models.

use serde::{Deserialize, Serialize};


/// Decoded backend response for one request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Exact number of matching documents.
    pub total: u64,
    pub current_page: u64,
    pub page_size: u64,
    /// Document identifiers in the backend's ranking order.
    pub ids: Vec<String>,
    /// Facets that yielded data, in decode order (`position` ascending).
    pub facets: Vec<Facet>,
}

impl SearchResult {
    pub fn facet(&self, code: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.code() == code)
    }
}

/// A refinement summary for one facetable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Facet {
    Options(OptionsFacet),
    Range(RangeFacet),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsFacet {
    pub code: String,
    /// 0-based index among the facets that yielded data.
    pub position: u64,
    /// True when at least one option is currently applied.
    pub is_in_use: bool,
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFacet {
    pub code: String,
    pub position: u64,
    /// Range facets have no applied-option concept; always false.
    pub is_in_use: bool,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub count: u64,
    pub applied: bool,
}

impl Facet {
    pub fn code(&self) -> &str {
        match self {
            Facet::Options(f) => &f.code,
            Facet::Range(f) => &f.code,
        }
    }

    pub fn position(&self) -> u64 {
        match self {
            Facet::Options(f) => f.position,
            Facet::Range(f) => f.position,
        }
    }

    pub fn is_in_use(&self) -> bool {
        match self {
            Facet::Options(f) => f.is_in_use,
            Facet::Range(f) => f.is_in_use,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_lookup_by_code() {
        let result = SearchResult {
            total: 2,
            current_page: 1,
            page_size: 10,
            ids: vec!["a".to_string(), "b".to_string()],
            facets: vec![
                Facet::Options(OptionsFacet {
                    code: "color".to_string(),
                    position: 0,
                    is_in_use: false,
                    options: vec![],
                }),
                Facet::Range(RangeFacet {
                    code: "price".to_string(),
                    position: 1,
                    is_in_use: false,
                    min: 5.0,
                    max: 99.0,
                }),
            ],
        };

        assert_eq!(result.facet("price").map(|f| f.position()), Some(1));
        assert!(result.facet("brand").is_none());
    }
}
