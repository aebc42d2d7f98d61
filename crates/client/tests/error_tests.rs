//! Error classification tests.
//!
//! Non-2xx responses carry the raw body through [`ClientError::Api`];
//! transport failures surface as [`ClientError::Http`].

mod common;

use common::*;
use serde_json::json;
use vvp_client::{ClientError, VvpClient};

#[tokio::test]
async fn api_error_preserves_status_and_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"error": "deployment not found"}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.get_deployment("default", "missing").await.unwrap_err();

    match err {
        ClientError::Api { status, ref message } => {
            assert_eq!(status, 404);
            assert!(message.contains("deployment not found"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.list_jobs("default").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn error_with_empty_body_still_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.delete_deployment("default", "orders").await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("409"));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Port 1 is never listening.
    let client = VvpClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .build()
        .unwrap();

    let err = client.list_namespaces().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.to_string().starts_with("request failed"));
}

#[tokio::test]
async fn malformed_json_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("not json", "application/json"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.get_status().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn success_with_json_error_shape_is_not_an_error() {
    // Classification is by status code only, never body sniffing.
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/namespaces/v1/namespaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "error": "this field is junk but the call succeeded"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let namespaces = client.list_namespaces().await.unwrap();
    assert!(namespaces.is_empty());
}
