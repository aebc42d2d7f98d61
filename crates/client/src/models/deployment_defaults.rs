//! Namespace-level deployment defaults.

use serde::{Deserialize, Serialize};

use crate::models::common::Metadata;
use crate::models::deployment::DeploymentSpec;

/// Default deployment spec applied to new deployments in a namespace.
///
/// There is exactly one per namespace; it is fetched and replaced, never
/// created or deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: DeploymentSpec,
}
