//! Platform status models.

use serde::{Deserialize, Serialize};

/// Platform-wide health and version report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub health: HealthStatus,
    pub version: VersionInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_usage: Option<ResourceUsageCounts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceUsageCounts {
    pub deployments: i64,
    pub jobs: i64,
    pub session_clusters: i64,
    pub namespaces: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_full_report() {
        let json = r#"{
            "health": {"status": "HEALTHY"},
            "version": {"platform": "2.14.0", "flink": "1.20.0", "edition": "community"},
            "components": [
                {"name": "appmanager", "status": "RUNNING", "version": "2.14.0"},
                {"name": "gateway", "status": "DEGRADED", "message": "slow responses"}
            ],
            "resourceUsage": {"deployments": 12, "jobs": 9, "sessionClusters": 1, "namespaces": 3}
        }"#;
        let status: PlatformStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.health.status.as_deref(), Some("HEALTHY"));
        assert_eq!(status.components.len(), 2);
        assert_eq!(status.resource_usage.unwrap().deployments, 12);
    }
}
