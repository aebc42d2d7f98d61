//! Deployment defaults operations.
//!
//! One singleton resource per namespace. The verbs are asymmetric on the
//! server side: `PUT` takes a full [`DeploymentDefaults`] document, while
//! `PATCH` takes a [`SecretValue`] body. Both shapes are preserved here.

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{DeploymentDefaults, SecretValue};

impl VvpClient {
    /// Get the deployment defaults for a namespace.
    pub async fn get_deployment_defaults(&self, namespace: &str) -> Result<DeploymentDefaults> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-defaults",
            encode_path_segment(namespace)
        );
        self.get_json(&path).await
    }

    /// Replace the deployment defaults for a namespace.
    pub async fn replace_deployment_defaults(
        &self,
        namespace: &str,
        defaults: &DeploymentDefaults,
    ) -> Result<DeploymentDefaults> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-defaults",
            encode_path_segment(namespace)
        );
        self.put_json(&path, defaults).await
    }

    /// Patch the deployment defaults for a namespace.
    pub async fn update_deployment_defaults(
        &self,
        namespace: &str,
        secret: &SecretValue,
    ) -> Result<DeploymentDefaults> {
        let path = format!(
            "/api/v1/namespaces/{}/deployment-defaults",
            encode_path_segment(namespace)
        );
        self.patch_json(&path, secret).await
    }
}
