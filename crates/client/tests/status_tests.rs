//! Platform status and usage report endpoint tests.

mod common;

use common::*;
use serde_json::json;
use vvp_client::ClientError;

#[tokio::test]
async fn get_status_decodes_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "health": {"status": "HEALTHY"},
            "version": {"platform": "2.14.0", "flink": "1.20.0"},
            "components": [{"name": "appmanager", "status": "RUNNING"}],
            "resourceUsage": {"deployments": 3, "jobs": 2, "sessionClusters": 0, "namespaces": 1}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let status = client.get_status().await.unwrap();

    assert_eq!(status.health.status.as_deref(), Some("HEALTHY"));
    assert_eq!(status.version.platform.as_deref(), Some("2.14.0"));
    assert_eq!(status.resource_usage.unwrap().deployments, 3);
}

#[tokio::test]
async fn usage_report_passes_time_bounds_as_query() {
    let server = MockServer::start().await;

    let csv = "# resource usage\nnamespace,deployments\ndefault,3\n";
    Mock::given(method("GET"))
        .and(path("/api/v1/status/resourceusage"))
        .and(query_param("from", "2024-05-01"))
        .and(query_param("to", "2024-05-31"))
        .respond_with(ResponseTemplate::new(200).set_body_string(csv))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let report = client
        .get_resource_usage_report(Some("2024-05-01"), Some("2024-05-31"))
        .await
        .unwrap();

    let rows = report.parse_csv().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["deployments"], "3");
}

#[tokio::test]
async fn usage_report_omits_unset_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status/resourceusage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("namespace,jobs\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let report = client.get_resource_usage_report(None, None).await.unwrap();
    assert!(report.parse_csv().unwrap().is_empty());
}

#[tokio::test]
async fn usage_report_404_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status/resourceusage"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.get_resource_usage_report(None, None).await.unwrap_err();

    assert!(matches!(err, ClientError::UsageReportUnavailable));
    assert!(err.to_string().contains("not enabled"));
}
