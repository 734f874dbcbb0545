//! Search service facade over a pluggable search backend.

use std::future::Future;

use common::{
    search_config::SearchConfig,
    search_query::SearchQuery,
    search_request::{BackendRequest, build_request},
    search_result::SearchResponse,
};
use tracing::info;

use crate::{
    api::search::{SearchError, search_dsl::build_search_body, search_response::parse_search_response},
    db_utils::{backend_config::BackendConfig, elasticsearch_utils::elasticsearch_search},
};

/// Executes a fully built request against a search engine.
pub trait SearchBackend {
    fn execute(&self, request: &BackendRequest) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ElasticsearchBackend {
    config: BackendConfig,
}

impl ElasticsearchBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl SearchBackend for ElasticsearchBackend {
    async fn execute(&self, request: &BackendRequest) -> Result<SearchResponse, SearchError> {
        let body = build_search_body(request);
        let raw = elasticsearch_search(&self.config, &body).await?;
        Ok(parse_search_response(raw, request))
    }
}

pub struct SearchService<B> {
    config: SearchConfig,
    backend: B,
}

impl<B: SearchBackend> SearchService<B> {
    pub fn new(config: SearchConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Invalid queries are rejected before anything is sent to the backend.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let request = build_request(query, &self.config)?;
        let t0 = std::time::Instant::now();
        let response = self.backend.execute(&request).await?;
        info!(
            "SEARCH: {:?} page {} x {} -> {} hits ({}ms)",
            request.query_text,
            request.pagination.page,
            request.pagination.page_size,
            response.total_hits,
            t0.elapsed().as_millis()
        );
        Ok(response)
    }
}
