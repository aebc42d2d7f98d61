//! Deployment target operations.

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{DeploymentTarget, DeploymentTargetList};

impl VvpClient {
    /// List all deployment targets in a namespace.
    pub async fn list_deployment_targets(&self, namespace: &str) -> Result<Vec<DeploymentTarget>> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-targets",
            encode_path_segment(namespace)
        );
        let list: DeploymentTargetList = self.get_json(&path).await?;
        Ok(list.items)
    }

    /// Get a deployment target by name.
    pub async fn get_deployment_target(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<DeploymentTarget> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-targets/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.get_json(&path).await
    }

    /// Create a new deployment target.
    pub async fn create_deployment_target(
        &self,
        namespace: &str,
        target: &DeploymentTarget,
    ) -> Result<DeploymentTarget> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-targets",
            encode_path_segment(namespace)
        );
        self.post_json(&path, target).await
    }

    /// Replace an existing deployment target.
    pub async fn update_deployment_target(
        &self,
        namespace: &str,
        name: &str,
        target: &DeploymentTarget,
    ) -> Result<DeploymentTarget> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-targets/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.put_json(&path, target).await
    }

    /// Delete a deployment target.
    pub async fn delete_deployment_target(&self, namespace: &str, name: &str) -> Result<()> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-targets/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.delete(&path).await
    }
}
