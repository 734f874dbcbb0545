//! Elasticsearch query DSL builder for search requests.

use std::collections::{BTreeMap, BTreeSet};

use common::{
    search_config::FacetKind,
    search_request::BackendRequest,
    text_highlight::{END_TAG, START_TAG},
};
use serde_json::{Map, Value, json};


pub fn build_search_body(request: &BackendRequest) -> Value {
    let source_fields = request
        .result_fields
        .iter()
        .filter(|(_, projection)| projection.wants_raw())
        .map(|(field, _)| field.clone())
        .collect::<Vec<_>>();

    let mut body = Map::new();
    body.insert("query".to_string(), build_text_clause(request));
    // facet filters narrow the hits, not the facet counts; each facet
    // aggregation re-applies the other facets' filters itself
    body.insert("post_filter".to_string(), build_filter_clause(&request.filters, None));
    body.insert("aggs".to_string(), build_aggregations(request));
    if let Some(highlight) = build_highlight(request) {
        body.insert("highlight".to_string(), highlight);
    }
    body.insert("_source".to_string(), json!(source_fields));
    body.insert("from".to_string(), json!(request.pagination.offset()));
    body.insert("size".to_string(), json!(request.pagination.page_size));
    body.insert("track_total_hits".to_string(), json!(true));
    Value::Object(body)
}

/// Free text goes to the engine unmodified.
fn build_text_clause(request: &BackendRequest) -> Value {
    if request.query_text.trim().is_empty() {
        return json!({ "match_all": {} });
    }
    json!({
        "simple_query_string": {
            "query": request.query_text,
            "fields": request.search_fields,
            "default_operator": "or",
        }
    })
}

pub fn build_filter_clause(filters: &BTreeMap<String, BTreeSet<String>>, skip_field: Option<&str>) -> Value {
    let terms = filters
        .iter()
        .filter(|(field, values)| Some(field.as_str()) != skip_field && !values.is_empty())
        .map(|(field, values)| {
            let mut clause = Map::new();
            clause.insert(field.clone(), json!(values));
            json!({ "terms": clause })
        })
        .collect::<Vec<_>>();

    if terms.is_empty() {
        return json!({ "match_all": {} });
    }
    json!({ "bool": { "filter": terms } })
}

fn build_aggregations(request: &BackendRequest) -> Value {
    let mut aggs = Map::new();
    for facet in &request.facets {
        let values = match facet.kind {
            FacetKind::Value => json!({
                "terms": { "field": facet.field, "size": facet.max_buckets }
            }),
        };
        aggs.insert(
            facet.field.clone(),
            json!({
                "filter": build_filter_clause(&request.filters, Some(&facet.field)),
                "aggs": { "values": values },
            }),
        );
    }
    Value::Object(aggs)
}

fn build_highlight(request: &BackendRequest) -> Option<Value> {
    let mut fields = Map::new();
    for (field, projection) in &request.result_fields {
        if let Some(snippet) = projection.snippet {
            fields.insert(
                field.clone(),
                json!({ "fragment_size": snippet.max_length, "number_of_fragments": 1 }),
            );
        }
    }
    if fields.is_empty() {
        return None;
    }
    Some(json!({
        "pre_tags": [START_TAG],
        "post_tags": [END_TAG],
        "fields": fields,
    }))
}
