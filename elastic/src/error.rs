//! Error taxonomy for query compilation and response decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A `Filter` variant reached the compiler or decoder before they were
    /// updated to handle it. Programmer error; never retried.
    #[error("unsupported filter kind for filter `{code}`")]
    UnsupportedFilterKind { code: String },

    /// The backend response is missing an expected key or shape.
    #[error("malformed search backend response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    pub(crate) fn unsupported(code: &str) -> Self {
        SearchError::UnsupportedFilterKind {
            code: code.to_string(),
        }
    }

    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        SearchError::MalformedResponse(context.into())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_filter_kind_names_the_offending_code() {
        let err = SearchError::unsupported("color");
        assert_eq!(
            err.to_string(),
            "unsupported filter kind for filter `color`"
        );
    }

    #[test]
    fn malformed_response_keeps_context() {
        let err = SearchError::malformed("missing key `hits`");
        assert!(err.to_string().contains("missing key `hits`"));
    }
}
