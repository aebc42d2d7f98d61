//! Deployment resource models.
//!
//! The deployment is the central resource: a desired-state record whose
//! template embeds the Flink artifact, parallelism, resources, and
//! arbitrary Kubernetes pod overrides (see [`crate::models::kubernetes`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::common::{Metadata, Quantity};
use crate::models::kubernetes::KubernetesOptions;

/// Desired state of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentState {
    Running,
    Cancelled,
    Suspended,
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Running => "RUNNING",
            Self::Cancelled => "CANCELLED",
            Self::Suspended => "SUSPENDED",
        };
        f.write_str(s)
    }
}

/// A platform deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: DeploymentSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DeploymentState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_strategy: Option<UpgradeStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_strategy: Option<RestoreStrategy>,
    /// The server keys this by `deploymentTargetId` even though it carries
    /// an id/name pair.
    #[serde(
        rename = "deploymentTargetId",
        skip_serializing_if = "Option::is_none"
    )]
    pub deployment_target: Option<DeploymentTargetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_savepoint_creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_job_creation_time: Option<String>,
}

/// Observed deployment state reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestoreStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_non_restored_state: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTargetRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub spec: TemplateSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_task_managers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub flink_configuration: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<KubernetesOptions>,
}

/// The job artifact (JAR, Python, or SQL script).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_args: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flink_image_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobmanager: Option<ResourceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taskmanager: Option<ResourceSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logging {
    #[serde(rename = "log4jLoggers", skip_serializing_if = "BTreeMap::is_empty")]
    pub log4j_loggers: BTreeMap<String, String>,
}

/// List responses wrap each deployment with operator info.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentList {
    pub items: Vec<DeploymentListItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentListItem {
    pub deployment: Deployment,
}

impl DeploymentList {
    /// Unwrap the per-item envelope, preserving server order.
    pub fn into_deployments(self) -> Vec<Deployment> {
        self.items.into_iter().map(|item| item.deployment).collect()
    }
}

impl Deployment {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_state_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeploymentState::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        let state: DeploymentState = serde_json::from_str("\"SUSPENDED\"").unwrap();
        assert_eq!(state, DeploymentState::Suspended);
    }

    #[test]
    fn effective_state_prefers_status() {
        let deployment = Deployment {
            spec: DeploymentSpec {
                state: Some(DeploymentState::Running),
                ..Default::default()
            },
            status: Some(DeploymentStatus {
                state: Some("TRANSITIONING".to_string()),
                running: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            deployment.effective_state().as_deref(),
            Some("TRANSITIONING")
        );
    }

    #[test]
    fn jar_deployment_round_trips_json_and_yaml() {
        let deployment = Deployment {
            metadata: Metadata {
                name: Some("orders".to_string()),
                namespace: Some("prod".to_string()),
                ..Default::default()
            },
            spec: DeploymentSpec {
                state: Some(DeploymentState::Running),
                deployment_target: Some(DeploymentTargetRef {
                    name: Some("k8s-prod".to_string()),
                    ..Default::default()
                }),
                template: Some(Template {
                    spec: TemplateSpec {
                        artifact: Some(Artifact {
                            kind: Some("JAR".to_string()),
                            jar_uri: Some("s3://bucket/app.jar".to_string()),
                            ..Default::default()
                        }),
                        parallelism: Some(4),
                        resources: Some(Resources {
                            jobmanager: Some(ResourceSpec {
                                cpu: Some(Quantity::Number(1.0)),
                                memory: Some(Quantity::Text("1g".to_string())),
                            }),
                            taskmanager: None,
                        }),
                        ..Default::default()
                    },
                }),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&deployment).unwrap();
        let from_json: Deployment = serde_json::from_str(&json).unwrap();
        assert_eq!(deployment, from_json);

        let yaml = serde_yaml::to_string(&deployment).unwrap();
        let from_yaml: Deployment = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(deployment, from_yaml);
    }

    #[test]
    fn pod_template_volume_secret_decodes_from_yaml() {
        let yaml = r#"
kind: Deployment
apiVersion: v1
metadata:
  name: simple-deployment
spec:
  state: RUNNING
  template:
    spec:
      artifact:
        kind: JAR
        jarUri: "http://example.com/app.jar"
      kubernetes:
        jobManagerPodTemplate:
          apiVersion: v1
          kind: Pod
          spec:
            volumes:
              - name: secret-vol
                secret:
                  secretName: my-secret
"#;
        let deployment: Deployment = serde_yaml::from_str(yaml).unwrap();
        let kubernetes = deployment
            .spec
            .template
            .unwrap()
            .spec
            .kubernetes
            .unwrap();
        let volumes = kubernetes
            .job_manager_pod_template
            .unwrap()
            .spec
            .unwrap()
            .volumes;
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].name.as_deref(), Some("secret-vol"));
        assert_eq!(
            volumes[0]
                .secret
                .as_ref()
                .unwrap()
                .secret_name
                .as_deref(),
            Some("my-secret")
        );
    }

    #[test]
    fn full_kubernetes_overrides_decode_from_yaml() {
        let yaml = r#"
metadata:
  name: test-deployment
  namespace: default
spec:
  state: RUNNING
  template:
    spec:
      artifact:
        kind: JAR
        jarUri: "http://example.com/app.jar"
        flinkVersion: "1.20"
      parallelism: 1
      kubernetes:
        labels:
          team: test
        pods:
          nodeSelector:
            node-type: worker
          tolerations:
            - key: test
              operator: Equal
              value: "true"
              effect: NoSchedule
          envVars:
            - name: ENV_VAR
              value: test-value
            - name: SECRET_VAR
              valueFrom:
                secretKeyRef:
                  name: my-secret
                  key: secret-key
        taskManagerPodTemplate:
          apiVersion: v1
          kind: Pod
          spec:
            containers:
              - name: flink-main-container
                volumeMounts:
                  - name: data
                    mountPath: /mnt/data
            volumes:
              - name: data
                emptyDir: {}
"#;
        let deployment: Deployment = serde_yaml::from_str(yaml).unwrap();
        let kubernetes = deployment
            .spec
            .template
            .unwrap()
            .spec
            .kubernetes
            .unwrap();

        assert_eq!(kubernetes.labels.get("team").map(String::as_str), Some("test"));

        let pods = kubernetes.pods.unwrap();
        assert_eq!(
            pods.node_selector.get("node-type").map(String::as_str),
            Some("worker")
        );
        assert_eq!(pods.tolerations.len(), 1);
        assert_eq!(pods.tolerations[0].key.as_deref(), Some("test"));
        assert_eq!(pods.env_vars.len(), 2);
        assert_eq!(pods.env_vars[0].name, "ENV_VAR");
        let source = pods.env_vars[1].value_from.as_ref().unwrap();
        assert_eq!(source.secret_key_ref.as_ref().unwrap().key, "secret-key");

        let tm = kubernetes.task_manager_pod_template.unwrap().spec.unwrap();
        assert_eq!(tm.containers.len(), 1);
        assert_eq!(tm.volumes.len(), 1);
        assert!(tm.volumes[0].empty_dir.is_some());
    }
}
