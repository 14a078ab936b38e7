//! Wire-level constants shared by the compiler and decoder.

/// Maximum number of distinct values requested per option-facet terms
/// aggregation.
pub const FACET_TERMS_LIMIT: u64 = 500;

/// Suffix appended to a filter code to form its aggregation key.
pub const AGG_KEY_SUFFIX: &str = "_bucket";

/// Name of the nested sub-aggregation that applies the sibling filter set.
pub const FILTERED_AGG_KEY: &str = "filtered";

/// Docvalue field holding the document identifier.
pub const ID_FIELD: &str = "_id";

/// Docvalue field holding the ranking score.
pub const SCORE_FIELD: &str = "_score";

/// Sentinel telling the backend not to load stored fields for hits.
pub const STORED_FIELDS_NONE: &str = "_none_";
