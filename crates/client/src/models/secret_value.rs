//! Secret value resource models.
//!
//! The API returns secret payloads in the clear; redaction is an output
//! concern, so the model keeps the plain string.

use serde::{Deserialize, Serialize};

use crate::models::common::Metadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: SecretValueSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretValueSpec {
    /// Secret kind, e.g. `GENERIC`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretValueList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub items: Vec<SecretValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_value_decodes_from_yaml() {
        let yaml = r#"
apiVersion: v1
kind: SecretValue
metadata:
  name: kafka-password
  namespace: default
  labels:
    app: kafka
spec:
  kind: GENERIC
  value: my-secret-password
"#;
        let secret: SecretValue = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(secret.metadata.name.as_deref(), Some("kafka-password"));
        assert_eq!(secret.spec.kind.as_deref(), Some("GENERIC"));
        assert_eq!(secret.spec.value.as_deref(), Some("my-secret-password"));
    }

    #[test]
    fn list_decodes_items_in_order() {
        let yaml = r#"
apiVersion: v1
kind: SecretValueList
items:
  - kind: SecretValue
    metadata:
      name: db-password
    spec:
      kind: GENERIC
      value: db-secret-123
  - kind: SecretValue
    metadata:
      name: api-key
    spec:
      kind: GENERIC
      value: api-key-456
"#;
        let list: SecretValueList = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].metadata.name.as_deref(), Some("db-password"));
        assert_eq!(list.items[1].spec.value.as_deref(), Some("api-key-456"));
    }
}
