use common::{search_config::SearchConfig, search_query::SearchQuery, search_result::SearchResponse};

use crate::{
    api::search::{ElasticsearchBackend, SearchService},
    db_utils::backend_config::BackendConfig,
};

/// Entry point for the frontend: search the transcription index configured in
/// the environment.
pub async fn search_transcripts(query: SearchQuery) -> anyhow::Result<SearchResponse> {
    let backend = ElasticsearchBackend::new(BackendConfig::from_env());
    let service = SearchService::new(SearchConfig::transcripts(), backend);
    Ok(service.search(&query).await?)
}
