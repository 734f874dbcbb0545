use std::sync::Mutex;

use backend::{
    api::search::{ElasticsearchBackend, SearchBackend, SearchError, SearchService},
    db_utils::backend_config::BackendConfig,
};
use common::{
    result_presenter::{DisplayRules, render_hits},
    search_config::SearchConfig,
    search_query::SearchQuery,
    search_request::{BackendRequest, QueryError},
    search_result::{Hit, SearchResponse},
};
use mockito::Matcher;
use serde_json::json;

/// Records every request and answers with a fixed response.
#[derive(Default)]
struct RecordingBackend {
    requests: Mutex<Vec<BackendRequest>>,
    response: SearchResponse,
}

impl SearchBackend for RecordingBackend {
    async fn execute(&self, request: &BackendRequest) -> Result<SearchResponse, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

fn es_response() -> serde_json::Value {
    json!({
        "took": 2,
        "timed_out": false,
        "hits": {
            "total": { "value": 31, "relation": "eq" },
            "hits": [
                {
                    "_id": "clips/a.mp3",
                    "_score": 2.0,
                    "_source": {
                        "generated_text": "hello there",
                        "duration": 3.2,
                        "gender": "female",
                        "path": "clips/a.mp3"
                    },
                    "highlight": { "generated_text": ["<em>hello</em> there"] }
                }
            ]
        },
        "aggregations": {
            "accent": { "doc_count": 31, "values": { "buckets": [
                { "key": "us", "doc_count": 20 },
                { "key": "england", "doc_count": 8 },
                { "key": "indian", "doc_count": 3 }
            ] } }
        }
    })
}

#[tokio::test]
async fn invalid_page_size_never_reaches_backend() {
    let service = SearchService::new(SearchConfig::transcripts(), RecordingBackend::default());
    let query = SearchQuery { page_size: 15, ..SearchQuery::from_text("hello") };

    let err = service.search(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::Query(QueryError::InvalidPageSize { page_size: 15, .. })));

    let query = SearchQuery { page: 0, ..SearchQuery::from_text("hello") };
    let err = service.search(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::Query(QueryError::InvalidPage(0))));
}

#[tokio::test]
async fn mock_backend_receives_built_request() {
    let backend = RecordingBackend {
        response: SearchResponse {
            hits: vec![Hit::default().with_snippet("generated_text", "<em>hi</em>")],
            total_hits: 1,
            page: 2,
            page_size: 20,
            ..Default::default()
        },
        ..Default::default()
    };
    let service = SearchService::new(SearchConfig::transcripts(), backend);
    let mut query = SearchQuery::from_text("hi");
    query.toggle_facet("gender", "male");
    query.page = 2;
    query.page_size = 20;

    let response = service.search(&query).await.unwrap();
    assert_eq!(response.hits.len(), 1);

    let requests = service_requests(&service);
    assert_eq!(requests.len(), 1);
    assert_eq!((requests[0].pagination.page, requests[0].pagination.page_size), (2, 20));
    assert!(requests[0].filters["gender"].contains("male"));
}

fn service_requests(service: &SearchService<RecordingBackend>) -> Vec<BackendRequest> {
    service.backend().requests.lock().unwrap().clone()
}

#[tokio::test]
async fn elasticsearch_round_trip_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/cv-transcriptions/_search")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "query": { "simple_query_string": { "query": "hello", "fields": ["generated_text"] } },
            "from": 0,
            "size": 10,
            "track_total_hits": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(es_response().to_string())
        .create_async()
        .await;

    let backend = ElasticsearchBackend::new(BackendConfig::new(server.url(), "cv-transcriptions"));
    let service = SearchService::new(SearchConfig::transcripts(), backend);
    let response = service.search(&SearchQuery::from_text("hello")).await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.total_hits, 31);
    assert_eq!(response.facet_buckets["accent"].len(), 3);

    let records = render_hits(&response, &DisplayRules::transcripts());
    assert_eq!(records[0].text.as_str(), "<em>hello</em> there");
    assert_eq!(records[0].metadata_line(), "Duration: 3.2s | Gender: female | File: clips/a.mp3");
}

#[tokio::test]
async fn backend_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/cv-transcriptions/_search")
        .with_status(500)
        .with_body("index_not_found_exception")
        .create_async()
        .await;

    let backend = ElasticsearchBackend::new(BackendConfig::new(server.url(), "cv-transcriptions"));
    let err = backend
        .execute(&common::search_request::build_request(&SearchQuery::default(), &SearchConfig::transcripts()).unwrap())
        .await
        .unwrap_err();
    match err {
        SearchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("index_not_found_exception"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_systemic_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/cv-transcriptions/_search")
        .with_status(200)
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let backend = ElasticsearchBackend::new(BackendConfig::new(server.url(), "cv-transcriptions"));
    let service = SearchService::new(SearchConfig::transcripts(), backend);
    let err = service.search(&SearchQuery::default()).await.unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}
