//! Conversion of raw Elasticsearch responses into typed search responses.

use std::collections::BTreeMap;

use common::{
    search_request::BackendRequest,
    search_result::{FacetBucket, Hit, HitField, SearchResponse},
};
use serde_json::Value;
use tracing::warn;

use crate::db_utils::elasticsearch_utils::{RawSearchResult, RawSearchResultHit};

pub fn parse_search_response(raw: RawSearchResult, request: &BackendRequest) -> SearchResponse {
    let total_hits = raw
        .hits
        .total
        .map(|t| t.value())
        .unwrap_or(raw.hits.hits.len() as u64);

    let hits = raw.hits.hits.iter().map(|hit| parse_hit(hit, request)).collect();

    let mut facet_buckets = BTreeMap::new();
    let aggregations = raw.aggregations.unwrap_or_default();
    for facet in &request.facets {
        let Some(aggregation) = aggregations.get(&facet.field) else {
            continue;
        };
        let buckets = aggregation
            .values
            .buckets
            .iter()
            .filter_map(|bucket| {
                let value = scalar_to_string(&bucket.key);
                if value.is_none() {
                    warn!("ignoring facet bucket with non-scalar key in {}: {:?}", facet.field, bucket.key);
                }
                value.map(|value| FacetBucket { value, count: bucket.doc_count })
            })
            .take(facet.max_buckets as usize)
            .collect::<Vec<_>>();
        facet_buckets.insert(facet.field.clone(), buckets);
    }

    SearchResponse {
        hits,
        facet_buckets,
        total_hits,
        page: request.pagination.page,
        page_size: request.pagination.page_size,
    }
}

fn parse_hit(hit: &RawSearchResultHit, request: &BackendRequest) -> Hit {
    let mut fields = BTreeMap::new();
    for (name, projection) in &request.result_fields {
        let raw = if projection.wants_raw() {
            hit._source.get(name).and_then(source_value_to_string)
        } else {
            None
        };
        let snippet = projection
            .snippet
            .and_then(|_| hit.highlight.get(name))
            .map(|fragments| fragments.join(" … "))
            .filter(|s| !s.is_empty());
        if raw.is_some() || snippet.is_some() {
            fields.insert(name.clone(), HitField { raw, snippet });
        }
    }
    Hit { fields }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Stored values are strings or numbers; arrays of scalars are joined.
fn source_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts = items.iter().filter_map(scalar_to_string).collect::<Vec<_>>();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        other => scalar_to_string(other),
    }
}
