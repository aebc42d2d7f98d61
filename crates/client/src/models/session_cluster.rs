//! Session cluster resource models.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::common::Metadata;
use crate::models::deployment::ResourceSpec;

/// Desired state of a session cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionClusterState {
    Running,
    Stopped,
}

impl fmt::Display for SessionClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Running => "RUNNING",
            Self::Stopped => "STOPPED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: SessionClusterSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionClusterStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_target_name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub flink_configuration: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_image_registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_image_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_version: Option<String>,
    /// Free-form Kubernetes overrides; round-tripped untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_task_managers: Option<i32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, ResourceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionClusterState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionClusterStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<SessionClusterRunning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SessionClusterFailure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionClusterRunning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionClusterFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionClusterList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub items: Vec<SessionCluster>,
}

impl SessionCluster {
    /// State shown to users: observed status when present, desired spec
    /// state otherwise.
    pub fn effective_state(&self) -> Option<String> {
        if let Some(status) = &self.status {
            if let Some(state) = &status.state {
                if !state.is_empty() {
                    return Some(state.clone());
                }
            }
        }
        self.spec.state.map(|s| s.to_string())
    }
}
