//! Secret value operations.

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{SecretValue, SecretValueList};

impl VvpClient {
    /// List all secret values in a namespace.
    pub async fn list_secret_values(&self, namespace: &str) -> Result<Vec<SecretValue>> {
        let path = format!(
            "/api/v1/namespaces/{}/secret-values",
            encode_path_segment(namespace)
        );
        let list: SecretValueList = self.get_json(&path).await?;
        Ok(list.items)
    }

    /// Get a secret value by name.
    pub async fn get_secret_value(&self, namespace: &str, name: &str) -> Result<SecretValue> {
        let path = format!(
            "/api/v1/namespaces/{}/secret-values/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.get_json(&path).await
    }

    /// Create a new secret value.
    pub async fn create_secret_value(
        &self,
        namespace: &str,
        secret: &SecretValue,
    ) -> Result<SecretValue> {
        let path = format!(
            "/api/v1/namespaces/{}/secret-values",
            encode_path_segment(namespace)
        );
        self.post_json(&path, secret).await
    }

    /// Replace an existing secret value.
    pub async fn update_secret_value(
        &self,
        namespace: &str,
        name: &str,
        secret: &SecretValue,
    ) -> Result<SecretValue> {
        let path = format!(
            "/api/v1/namespaces/{}/secret-values/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.put_json(&path, secret).await
    }

    /// Delete a secret value.
    pub async fn delete_secret_value(&self, namespace: &str, name: &str) -> Result<()> {
        let path = format!(
            "/api/v1/namespaces/{}/secret-values/{}",
            encode_path_segment(namespace),
            encode_path_segment(name)
        );
        self.delete(&path).await
    }
}
