use common::search_request::QueryError;

/// Failures that stop a search from producing a response. Missing fields on
/// individual hits are not errors; the presenter absorbs those.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("search backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("search backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
