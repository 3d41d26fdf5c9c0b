//! Metadata client tests against an in-process mock server.

mod common;

use cinescout::config::ApiConfig;
use cinescout::omdb::{OmdbClient, OmdbError};
use common::inception_json;
use common::mock_api::{MockApi, MockResponse};

fn test_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        api_key: Some("test-key".to_string()),
        timeout_seconds: 2,
    }
}

#[tokio::test]
async fn success_returns_fields_verbatim() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(inception_json())).await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let movie = client.search("Inception").await.unwrap();

    assert_eq!(movie, common::inception());
}

#[tokio::test]
async fn request_carries_title_and_key_as_query_params() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(inception_json())).await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    client.search("Blade Runner").await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/");
    // The space must be percent-encoded by the query builder.
    assert!(requests[0].query.contains("t=Blade%20Runner") || requests[0].query.contains("t=Blade+Runner"));
    assert!(requests[0].query.contains("apikey=test-key"));
}

#[tokio::test]
async fn response_false_maps_to_not_found() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"Response":"False","Error":"Movie not found!"}"#,
    ))
    .await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.search("Asdfghjkl").await.unwrap_err();

    match err {
        OmdbError::NotFound { reason } => assert_eq!(reason, "Movie not found!"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::status(401, r#"{"Error":"Invalid API key!"}"#))
        .await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.search("Inception").await.unwrap_err();

    assert!(matches!(err, OmdbError::UnexpectedStatus { status: 401 }));
}

#[tokio::test]
async fn non_json_body_is_malformed_payload() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::text("<html>not json</html>")).await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.search("Inception").await.unwrap_err();

    assert!(matches!(err, OmdbError::MalformedPayload));
}

#[tokio::test]
async fn hit_with_missing_fields_is_malformed_payload() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"Response":"True","Title":"Inception"}"#,
    ))
    .await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.search("Inception").await.unwrap_err();

    assert!(matches!(err, OmdbError::MalformedPayload));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind a port and drop the listener so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OmdbClient::new(&test_config(format!("http://{}", addr))).unwrap();
    let err = client.search("Inception").await.unwrap_err();

    assert!(matches!(err, OmdbError::Transport { .. }));
}

#[tokio::test]
async fn repeat_search_returns_equal_records() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(inception_json())).await;
    mock.enqueue(MockResponse::json(inception_json())).await;

    let client = OmdbClient::new(&test_config(mock.base_url())).unwrap();
    let first = client.search("Inception").await.unwrap();
    let second = client.search("Inception").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(mock.captured_requests().await.len(), 2);
}

#[test]
fn missing_api_key_fails_at_construction() {
    let config = ApiConfig {
        base_url: "https://example.invalid".to_string(),
        api_key: None,
        timeout_seconds: 2,
    };
    // Only meaningful when the key is not exported in the environment.
    if std::env::var(cinescout::config::API_KEY_ENV_VAR).is_ok() {
        return;
    }
    assert!(matches!(
        OmdbClient::new(&config),
        Err(OmdbError::MissingApiKey { .. })
    ));
}
