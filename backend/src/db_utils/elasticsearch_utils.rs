use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::{api::search::SearchError, db_utils::backend_config::BackendConfig};

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResult {
    pub hits: RawSearchResultHits,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub took: u64,
    pub aggregations: Option<BTreeMap<String, RawFacetAggregation>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHits {
    pub hits: Vec<RawSearchResultHit>,
    pub total: Option<RawTotalHits>,
}

/// `hits.total` is an object since Elasticsearch 7 and a bare number before.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(untagged)]
pub enum RawTotalHits {
    Object { value: u64 },
    Count(u64),
}

impl RawTotalHits {
    pub fn value(&self) -> u64 {
        match self {
            RawTotalHits::Object { value } => *value,
            RawTotalHits::Count(n) => *n,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHit {
    #[serde(default)]
    pub _id: Option<String>,
    #[serde(default)]
    pub _score: Option<f64>,
    #[serde(default)]
    pub _source: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub highlight: BTreeMap<String, Vec<String>>,
}

/// Per-facet `filter` aggregation wrapping the `values` terms aggregation.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RawFacetAggregation {
    #[serde(default)]
    pub doc_count: u64,
    #[serde(default)]
    pub values: RawTermsAggregation,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RawTermsAggregation {
    pub buckets: Vec<RawSearchResultAggregationBucket>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawSearchResultAggregationBucket {
    pub key: serde_json::Value,
    pub doc_count: u64,
}

pub async fn elasticsearch_search(
    config: &BackendConfig,
    body: &serde_json::Value,
) -> Result<RawSearchResult, SearchError> {
    let url = config.search_url();
    let body = body.to_string();
    debug!("SEARCH REQUEST: {} {}", url, body);

    let t0 = std::time::Instant::now();
    let client = reqwest::Client::builder().timeout(config.request_timeout).build()?;
    let response = client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        return Err(SearchError::Status { status: status.as_u16(), body: response_txt });
    }
    let dt_ms = t0.elapsed().as_millis();
    info!("SEARCH RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);

    let response: RawSearchResult = serde_json::from_str(&response_txt)?;
    Ok(response)
}
