//! End-to-end deployment command tests against a mock API.

mod common;

use common::vvpctl_cmd_with_url;
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn deployment_body(name: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": "default",
            "createdAt": "2024-05-01T10:00:00Z"
        },
        "spec": { "state": state },
        "status": { "state": state }
    })
}

#[tokio::test]
async fn list_renders_table_with_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ { "deployment": deployment_body("orders", "RUNNING") } ]
        })))
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "list", "-n", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("orders"))
        .stdout(predicate::str::contains("RUNNING"));
}

#[tokio::test]
async fn empty_list_in_json_is_an_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "list", "-n", "default", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[tokio::test]
async fn empty_list_in_table_mode_prints_a_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "list", "-n", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No deployments found."));
}

#[tokio::test]
async fn stop_patches_desired_state_to_cancelled() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .and(body_json(
            serde_json::json!({ "spec": { "state": "CANCELLED" } }),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(deployment_body("orders", "CANCELLED")),
        )
        .expect(1)
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "stop", "orders", "-n", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deployment orders state updated to CANCELLED",
        ));
}

#[tokio::test]
async fn force_delete_cancels_running_deployment_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deployment": deployment_body("orders", "RUNNING")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(deployment_body("orders", "CANCELLED")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "delete", "orders", "--force", "-n", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cancelling deployment orders before deletion...",
        ))
        .stdout(predicate::str::contains(
            "Deployment orders deleted successfully",
        ));
}

#[tokio::test]
async fn force_delete_skips_cancellation_when_already_cancelled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/deployments/with-cr/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deployment": deployment_body("orders", "CANCELLED")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/namespaces/default/deployments/orders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "delete", "orders", "--force", "-n", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted successfully"))
        .stdout(predicate::str::contains("Cancelling").not());
}

/// Namespaced commands fail fast with a helpful message when no
/// namespace is configured anywhere.
#[tokio::test]
async fn missing_namespace_is_a_descriptive_error() {
    let server = MockServer::start().await;

    vvpctl_cmd_with_url(&server.uri())
        .args(["deployment", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("namespace not specified"));
}
