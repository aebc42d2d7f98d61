//! Session cluster endpoint tests.
//!
//! Verifies the PATCH/PUT verb split between `update` and `upsert`.

mod common;

use common::*;
use serde_json::json;
use vvp_client::models::{SessionCluster, SessionClusterState};

fn cluster(name: &str) -> SessionCluster {
    serde_json::from_value(json!({
        "metadata": {"name": name, "namespace": "default"},
        "spec": {
            "deploymentTargetName": "k8s-dev",
            "flinkVersion": "1.20",
            "numberOfTaskManagers": 2,
            "state": "RUNNING"
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn list_session_clusters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/sessionclusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "metadata": {"name": "adhoc", "namespace": "default"},
                "spec": {"state": "RUNNING"},
                "status": {"state": "RUNNING"}
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let clusters = client.list_session_clusters("default").await.unwrap();

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].effective_state().as_deref(), Some("RUNNING"));
}

#[tokio::test]
async fn update_session_cluster_uses_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/namespaces/default/sessionclusters/adhoc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"name": "adhoc"},
            "spec": {"state": "RUNNING"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let updated = client
        .update_session_cluster("default", "adhoc", &cluster("adhoc"))
        .await
        .unwrap();
    assert_eq!(updated.spec.state, Some(SessionClusterState::Running));
}

#[tokio::test]
async fn upsert_session_cluster_uses_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/namespaces/default/sessionclusters/adhoc"))
        .and(body_string_contains("\"deploymentTargetName\":\"k8s-dev\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"name": "adhoc"},
            "spec": {"deploymentTargetName": "k8s-dev", "state": "RUNNING"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .upsert_session_cluster("default", "adhoc", &cluster("adhoc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn create_and_delete_session_cluster() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/namespaces/default/sessionclusters"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "metadata": {"id": "sc-1", "name": "adhoc"},
            "spec": {"state": "RUNNING"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/namespaces/default/sessionclusters/adhoc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let created = client
        .create_session_cluster("default", &cluster("adhoc"))
        .await
        .unwrap();
    assert_eq!(created.metadata.id.as_deref(), Some("sc-1"));
    client.delete_session_cluster("default", "adhoc").await.unwrap();
}
