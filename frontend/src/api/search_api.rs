//! Client API calls for search endpoints.

use common::{search_query::SearchQuery, search_result::SearchResponse};
use dioxus::prelude::*;


#[server]
pub async fn search_transcripts(input: SearchQuery) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_transcripts(input).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
