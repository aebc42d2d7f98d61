//! Types shared across resource models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource metadata shared by every entity.
///
/// Fields that a given resource does not use (e.g. `namespace` on the
/// global Namespace resource, `resourceVersion` on deployments) stay
/// `None` and are skipped during serialization, so the wire shape matches
/// each resource's own schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<i32>,
}

impl Metadata {
    /// Display name, falling back to the ID.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }
}

/// CPU or memory amount.
///
/// The API returns these as either numbers (`0.5`) or strings (`"1g"`),
/// so both are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_metadata_fields_are_skipped() {
        let meta = Metadata {
            name: Some("orders".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"name":"orders"}"#);
    }

    #[test]
    fn quantity_accepts_numbers_and_strings() {
        let number: Quantity = serde_json::from_str("0.5").unwrap();
        assert_eq!(number, Quantity::Number(0.5));
        let text: Quantity = serde_json::from_str("\"2g\"").unwrap();
        assert_eq!(text, Quantity::Text("2g".to_string()));
    }

    #[test]
    fn metadata_round_trips_through_yaml() {
        let meta = Metadata {
            id: Some("d-1".to_string()),
            name: Some("orders".to_string()),
            namespace: Some("prod".to_string()),
            labels: BTreeMap::from([("team".to_string(), "data".to_string())]),
            created_at: Some("2024-05-01T12:00:00Z".parse().unwrap()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&meta).unwrap();
        let back: Metadata = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(meta, back);
    }
}
