//! Deployment operations.
//!
//! Reads go through the `with-cr` variants, which wrap each deployment in
//! an envelope carrying operator info; the wrapper is unwrapped here so
//! callers only ever see [`Deployment`].

use serde_json::json;

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{Deployment, DeploymentList, DeploymentListItem, DeploymentState};

impl VvpClient {
    /// List all deployments in a namespace.
    pub async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments/with-cr",
            encode_path_segment(namespace)
        );
        let list: DeploymentList = self.get_json(&path).await?;
        Ok(list.into_deployments())
    }

    /// Get a deployment by name.
    pub async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments/with-cr/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        let wrapper: DeploymentListItem = self.get_json(&path).await?;
        Ok(wrapper.deployment)
    }

    /// Create a new deployment.
    pub async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments",
            encode_path_segment(namespace)
        );
        self.post_json(&path, deployment).await
    }

    /// Replace an existing deployment.
    pub async fn update_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.put_json(&path, deployment).await
    }

    /// Delete a deployment.
    pub async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.delete(&path).await
    }

    /// Patch only the desired state of a deployment, leaving the rest of
    /// the spec untouched. This is how start/stop/suspend/cancel work.
    pub async fn update_deployment_state(
        &self,
        namespace: &str,
        name: &str,
        state: DeploymentState,
    ) -> Result<Deployment> {
        let path = format!(
            "/api/v1/namespaces/{}/deployments/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        let patch = json!({"spec": {"state": state}});
        self.patch_json(&path, &patch).await
    }
}
