//! Namespace operations.
//!
//! These are platform-wide and live under `/namespaces/v1` instead of the
//! per-namespace `/api/v1` tree.

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{Namespace, NamespaceList};

impl VvpClient {
    /// List all namespaces.
    pub async fn list_namespaces(&self) -> Result<Vec<Namespace>> {
        let list: NamespaceList = self.get_json("/namespaces/v1/namespaces").await?;
        Ok(list.items)
    }

    /// Get a namespace by name.
    pub async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        let path = format!("/namespaces/v1/namespaces/{}", encode_path_segment(name));
        self.get_json(&path).await
    }

    /// Create a new namespace.
    pub async fn create_namespace(&self, namespace: &Namespace) -> Result<Namespace> {
        self.post_json("/namespaces/v1/namespaces", namespace).await
    }

    /// Replace an existing namespace.
    pub async fn update_namespace(&self, name: &str, namespace: &Namespace) -> Result<Namespace> {
        let path = format!("/namespaces/v1/namespaces/{}", encode_path_segment(name));
        self.put_json(&path, namespace).await
    }

    /// Delete a namespace.
    pub async fn delete_namespace(&self, name: &str) -> Result<()> {
        let path = format!("/namespaces/v1/namespaces/{}", encode_path_segment(name));
        self.delete(&path).await
    }
}
