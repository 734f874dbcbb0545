//! Search API: request translation, execution and response shaping.

mod search_error;
pub use search_error::SearchError;

mod search_service;
pub use search_service::{ElasticsearchBackend, SearchBackend, SearchService};

mod search_transcripts;
pub use search_transcripts::search_transcripts;

pub mod search_dsl;
pub mod search_response;
