//! Session cluster operations.
//!
//! Note the verb split: `update` PATCHes a partial spec, `upsert` PUTs a
//! full replacement (creating the cluster if it does not exist).

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{SessionCluster, SessionClusterList};

impl VvpClient {
    /// List all session clusters in a namespace.
    pub async fn list_session_clusters(&self, namespace: &str) -> Result<Vec<SessionCluster>> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters",
            encode_path_segment(namespace)
        );
        let list: SessionClusterList = self.get_json(&path).await?;
        Ok(list.items)
    }

    /// Get a session cluster by name.
    pub async fn get_session_cluster(&self, namespace: &str, name: &str) -> Result<SessionCluster> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.get_json(&path).await
    }

    /// Create a new session cluster.
    pub async fn create_session_cluster(
        &self,
        namespace: &str,
        cluster: &SessionCluster,
    ) -> Result<SessionCluster> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters",
            encode_path_segment(namespace)
        );
        self.post_json(&path, cluster).await
    }

    /// Patch an existing session cluster.
    pub async fn update_session_cluster(
        &self,
        namespace: &str,
        name: &str,
        cluster: &SessionCluster,
    ) -> Result<SessionCluster> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.patch_json(&path, cluster).await
    }

    /// Create or fully replace a session cluster by name.
    pub async fn upsert_session_cluster(
        &self,
        namespace: &str,
        name: &str,
        cluster: &SessionCluster,
    ) -> Result<SessionCluster> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.put_json(&path, cluster).await
    }

    /// Delete a session cluster.
    pub async fn delete_session_cluster(&self, namespace: &str, name: &str) -> Result<()> {
        let path = format!(
            "/api/v1/namespaces/{}/sessionclusters/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.delete(&path).await
    }
}
