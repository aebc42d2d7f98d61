//! Resource models for the platform API.
//!
//! Every entity follows the same convention: `metadata` (identity and
//! bookkeeping), `spec` (desired state, user-supplied), and an optional
//! `status` (observed state, server-supplied). All types carry serde
//! derives with camelCase wire names so the same struct round-trips
//! through JSON and YAML.

pub mod common;
pub mod deployment;
pub mod deployment_defaults;
pub mod deployment_target;
pub mod job;
pub mod kubernetes;
pub mod namespace;
pub mod savepoint;
pub mod secret_value;
pub mod session_cluster;
pub mod status;
pub mod usage;

pub use common::{Metadata, Quantity};
pub use deployment::{
    Artifact, Deployment, DeploymentList, DeploymentListItem, DeploymentSpec, DeploymentState,
    DeploymentStatus, DeploymentTargetRef, Logging, ResourceSpec, Resources, RestoreStrategy,
    Template, TemplateSpec, UpgradeStrategy,
};
pub use deployment_defaults::DeploymentDefaults;
pub use deployment_target::{DeploymentTarget, DeploymentTargetList, DeploymentTargetSpec, KubernetesTarget};
pub use job::{Job, JobList, JobSpec, JobStatus, JobStatusDetail};
pub use kubernetes::{
    Container, EnvVar, EnvVarSource, KeySelector, KubernetesOptions, PodMetadata, PodTemplate,
    PodTemplateSpec, PodsOptions, Toleration, Volume, VolumeMount,
};
pub use namespace::{Namespace, NamespaceList, NamespaceSpec, NamespaceStatus, RoleBinding};
pub use savepoint::{
    Savepoint, SavepointCreationRequest, SavepointList, SavepointSpec, SavepointStatus,
    SavepointStatusDetails,
};
pub use secret_value::{SecretValue, SecretValueList, SecretValueSpec};
pub use session_cluster::{
    SessionCluster, SessionClusterList, SessionClusterSpec, SessionClusterState,
    SessionClusterStatus,
};
pub use status::{Component, HealthStatus, PlatformStatus, ResourceUsageCounts, VersionInfo};
pub use usage::ResourceUsageReport;
