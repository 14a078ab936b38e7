//! Query compiler and result decoder for an Elasticsearch-compatible search
//! backend, implementing multi-select faceted search: each facet is counted
//! as if its own filter were not applied, while every other active filter
//! still constrains the candidate set.
//!
//! Both operations are pure and synchronous; transport to the backend is the
//! caller's concern.

pub mod error;
pub mod query_compiler;
pub mod raw_response;
pub mod result_decoder;
pub mod search_const;

pub use error::SearchError;
pub use query_compiler::{FieldMapper, compile};
pub use result_decoder::decode;
