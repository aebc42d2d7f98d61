//! Savepoint operations.

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{Savepoint, SavepointCreationRequest, SavepointList};

impl VvpClient {
    /// List all savepoints in a namespace.
    pub async fn list_savepoints(&self, namespace: &str) -> Result<Vec<Savepoint>> {
        let path = format!(
            "/api/v1/namespaces/{}/savepoints",
            encode_path_segment(namespace)
        );
        let list: SavepointList = self.get_json(&path).await?;
        Ok(list.items)
    }

    /// Get a savepoint by ID.
    pub async fn get_savepoint(&self, namespace: &str, savepoint_id: &str) -> Result<Savepoint> {
        let path = format!(
            "/api/v1/namespaces/{}/savepoints/{}",
            encode_path_segment(namespace),
            encode_path_segment(savepoint_id)
        );
        self.get_json(&path).await
    }

    /// Trigger a new savepoint.
    ///
    /// Exactly one of `spec.deployment_id` or `spec.job_id` must be set;
    /// this is checked before any request is sent and violations return
    /// [`ClientError::Validation`].
    pub async fn create_savepoint(
        &self,
        namespace: &str,
        request: &SavepointCreationRequest,
    ) -> Result<Savepoint> {
        match (&request.spec.deployment_id, &request.spec.job_id) {
            (None, None) => {
                return Err(ClientError::Validation(
                    "either a deployment ID or a job ID must be specified".to_string(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ClientError::Validation(
                    "cannot specify both a deployment ID and a job ID".to_string(),
                ));
            }
            _ => {}
        }
        let path = format!(
            "/api/v1/namespaces/{}/savepoints",
            encode_path_segment(namespace)
        );
        self.post_json(&path, request).await
    }

    /// Delete a savepoint record.
    pub async fn delete_savepoint(&self, namespace: &str, savepoint_id: &str) -> Result<()> {
        let path = format!(
            "/api/v1/namespaces/{}/savepoints/{}",
            encode_path_segment(namespace),
            encode_path_segment(savepoint_id)
        );
        self.delete(&path).await
    }
}
