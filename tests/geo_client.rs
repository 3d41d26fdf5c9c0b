//! Position-fix client tests against an in-process mock server.

mod common;

use cinescout::config::LocationConfig;
use cinescout::geo::{GeoClient, GeoError};
use common::mock_api::{MockApi, MockResponse};

fn test_config(base_url: String) -> LocationConfig {
    LocationConfig {
        base_url,
        timeout_seconds: 2,
    }
}

#[tokio::test]
async fn success_returns_exact_coordinate() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"status":"success","lat":40.0,"lon":-73.0}"#,
    ))
    .await;

    let client = GeoClient::new(&test_config(mock.base_url())).unwrap();
    let coordinate = client.current_position().await.unwrap();

    assert_eq!(coordinate.latitude, 40.0);
    assert_eq!(coordinate.longitude, -73.0);
}

#[tokio::test]
async fn requests_the_json_endpoint_with_field_filter() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"status":"success","lat":1.0,"lon":2.0}"#,
    ))
    .await;

    let client = GeoClient::new(&test_config(mock.base_url())).unwrap();
    client.current_position().await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/json");
    assert!(requests[0].query.contains("fields="));
}

#[tokio::test]
async fn service_failure_is_unavailable() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"status":"fail","message":"private range"}"#,
    ))
    .await;

    let client = GeoClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.current_position().await.unwrap_err();

    match err {
        GeoError::Unavailable { reason } => assert_eq!(reason, "private range"),
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn success_without_coordinates_is_malformed() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(r#"{"status":"success"}"#)).await;

    let client = GeoClient::new(&test_config(mock.base_url())).unwrap();
    let err = client.current_position().await.unwrap_err();

    assert!(matches!(err, GeoError::MalformedPayload));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeoClient::new(&test_config(format!("http://{}", addr))).unwrap();
    let err = client.current_position().await.unwrap_err();

    assert!(matches!(err, GeoError::Transport { .. }));
}
