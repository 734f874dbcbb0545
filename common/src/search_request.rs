//! Translation of a user query into the request sent to the search backend.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    search_config::{FacetSpec, ResultFieldSpec, SearchConfig},
    search_query::SearchQuery,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid page {0}: pages start at 1")]
    InvalidPage(u64),
    #[error("invalid page size {page_size}: expected one of {allowed:?}")]
    InvalidPageSize { page_size: u64, allowed: Vec<u64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    /// Zero-based offset of the first hit on this page. Saturates for pages
    /// far past the result window; the engine rejects those itself.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRequest {
    pub search_fields: Vec<String>,
    /// Free text exactly as typed; empty means match everything.
    pub query_text: String,
    pub result_fields: ResultFieldSpec,
    pub facets: Vec<FacetSpec>,
    pub filters: BTreeMap<String, BTreeSet<String>>,
    pub pagination: Pagination,
}

pub fn build_request(query: &SearchQuery, config: &SearchConfig) -> Result<BackendRequest, QueryError> {
    if !config.page_sizes.contains(&query.page_size) {
        return Err(QueryError::InvalidPageSize {
            page_size: query.page_size,
            allowed: config.page_sizes.clone(),
        });
    }
    if query.page < 1 {
        return Err(QueryError::InvalidPage(query.page));
    }

    let filters = query
        .selected_facets
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(field, values)| (field.clone(), values.clone()))
        .collect();

    Ok(BackendRequest {
        search_fields: config.search_fields.clone(),
        query_text: query.free_text.clone(),
        result_fields: config.result_fields.clone(),
        facets: config.facets.clone(),
        filters,
        pagination: Pagination { page: query.page, page_size: query.page_size },
    })
}
