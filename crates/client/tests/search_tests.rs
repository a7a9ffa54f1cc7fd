//! Search endpoint tests.
//!
//! This module tests `GET /api/search`:
//! - Parsing the JSON array into resource descriptors
//! - Bearer authentication and the Accept header
//! - Passing optional filters through as query parameters
//! - Rejecting bodies that are not an array of descriptors
//!
//! # Invariants
//! - One descriptor per array element, in response order
//! - No query string is sent when no filter is set

mod common;

use common::*;
use grafana_client::{ClientError, SearchKind, SearchOptions};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_search_returns_descriptor_per_element() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("search/search_results.json");

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::search(
        &client,
        &mock_server.uri(),
        TEST_TOKEN,
        &SearchOptions::default(),
        None,
    )
    .await;

    if let Err(ref e) = result {
        eprintln!("Search error: {:?}", e);
    }
    let descriptors = result.unwrap();
    assert_eq!(descriptors.len(), 3);
    assert_eq!(descriptors[0].uri, "db/cpu-overview");
    assert_eq!(descriptors[0].folder_title.as_deref(), Some("Operations"));
    assert_eq!(descriptors[1].uri, "db/http-latency");
    assert_eq!(descriptors[2].uri, "db/operations");
    assert!(descriptors[2].is_folder());
}

#[tokio::test]
async fn test_search_without_filters_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param_is_missing("query"))
        .and(query_param_is_missing("tag"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let descriptors = endpoints::search(
        &client,
        &mock_server.uri(),
        TEST_TOKEN,
        &SearchOptions::default(),
        None,
    )
    .await
    .unwrap();

    assert!(descriptors.is_empty());
}

#[tokio::test]
async fn test_search_passes_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "latency"))
        .and(query_param("tag", "prod"))
        .and(query_param("type", "dash-db"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "uri": "db/http-latency" }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = SearchOptions {
        query: Some("latency".to_string()),
        tags: vec!["prod".to_string()],
        kind: Some(SearchKind::DashDb),
        limit: Some(10),
    };

    let client = Client::new();
    let descriptors = endpoints::search(&client, &mock_server.uri(), TEST_TOKEN, &options, None)
        .await
        .unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].uri, "db/http-latency");
}

#[tokio::test]
async fn test_search_through_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "uri": "db/test" }])),
        )
        .mount(&mock_server)
        .await;

    let client = grafana_client(&mock_server);
    let descriptors = client.search(&SearchOptions::default()).await.unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].backup_name(), Some("test"));
}

#[tokio::test]
async fn test_search_non_array_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "uri": "db/test" })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::search(
        &client,
        &mock_server.uri(),
        TEST_TOKEN,
        &SearchOptions::default(),
        None,
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, ClientError::InvalidResponse(_)),
        "Expected InvalidResponse, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_search_malformed_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"uri\": "))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::search(
        &client,
        &mock_server.uri(),
        TEST_TOKEN,
        &SearchOptions::default(),
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
