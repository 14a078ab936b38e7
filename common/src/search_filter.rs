//! Typed filter variants attached to a search request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// One active (or empty-but-facetable) constraint on a searchable field.
///
/// The set of variants is closed on purpose: the query compiler and result
/// decoder match on it, so a new variant is a change that has to be carried
/// through both. Downstream crates must keep a fallback arm for variants
/// added after they were built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Filter {
    Options(OptionsFilter),
    Range(RangeFilter),
}

/// Discrete multi-select filter: the user picked zero or more values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OptionsFilter {
    pub code: String,
    pub is_facetable: bool,
    pub values: BTreeSet<String>,
}

/// Numeric interval filter. Either bound may be open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RangeFilter {
    pub code: String,
    pub is_facetable: bool,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl Filter {
    pub fn code(&self) -> &str {
        match self {
            Filter::Options(f) => &f.code,
            Filter::Range(f) => &f.code,
        }
    }

    pub fn is_facetable(&self) -> bool {
        match self {
            Filter::Options(f) => f.is_facetable,
            Filter::Range(f) => f.is_facetable,
        }
    }

    /// An empty filter carries no constraint and is left out of the compiled
    /// query, although its facet aggregation is still built when facetable.
    ///
    /// A range bound of exactly zero counts as absent, so a `gte: 0` bound
    /// cannot be expressed. Do not change this without product sign-off;
    /// saved range selections rely on it.
    pub fn is_empty(&self) -> bool {
        match self {
            Filter::Options(f) => f.values.is_empty(),
            Filter::Range(f) => {
                f.from.is_none_or(|v| v == 0.0) && f.to.is_none_or(|v| v == 0.0)
            }
        }
    }
}
