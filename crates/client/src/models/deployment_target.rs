//! Deployment target resource models.

use serde::{Deserialize, Serialize};

use crate::models::common::Metadata;

/// A deployment target: a named binding to a Kubernetes namespace that
/// deployments reference by id or name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTarget {
    pub metadata: Metadata,
    pub spec: DeploymentTargetSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentTargetStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTargetSpec {
    pub kubernetes: KubernetesTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTargetStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentTargetList {
    pub items: Vec<DeploymentTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_decodes_kubernetes_namespace() {
        let json = r#"{
            "metadata": {"name": "k8s-prod", "namespace": "default"},
            "spec": {"kubernetes": {"namespace": "flink-jobs"}}
        }"#;
        let target: DeploymentTarget = serde_json::from_str(json).unwrap();
        assert_eq!(
            target.spec.kubernetes.namespace.as_deref(),
            Some("flink-jobs")
        );
    }
}
