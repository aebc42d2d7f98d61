//! Secret values table formatter.
//!
//! The secret payload is never shown in table output; JSON and YAML
//! render the full document for piping.

use anyhow::Result;
use vvp_client::models::SecretValue;

use crate::formatters::{fmt_opt, fmt_time};

/// Placeholder shown in place of secret payloads.
pub const REDACTED: &str = "<hidden> (use -o json or -o yaml to view)";

/// Format secret values as a table.
pub fn format_secret_values(secrets: &[SecretValue]) -> Result<String> {
    let mut output = String::new();

    if secrets.is_empty() {
        output.push_str("No secret values found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<15} {:<12} {:<20}\n",
        "NAME", "NAMESPACE", "KIND", "CREATED"
    ));
    output.push_str(&format!(
        "{:<30} {:<15} {:<12} {:<20}\n",
        "====", "=========", "====", "======="
    ));

    for secret in secrets {
        output.push_str(&format!(
            "{:<30} {:<15} {:<12} {:<20}\n",
            fmt_opt(secret.metadata.name.as_deref()),
            fmt_opt(secret.metadata.namespace.as_deref()),
            fmt_opt(secret.spec.kind.as_deref()),
            fmt_time(secret.metadata.created_at),
        ));
    }

    Ok(output)
}

/// Format one secret value as a detail view, payload redacted.
pub fn format_secret_value_detail(secret: &SecretValue) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!(
        "Name: {}\n",
        fmt_opt(secret.metadata.name.as_deref())
    ));
    if let Some(id) = secret.metadata.id.as_deref() {
        output.push_str(&format!("ID: {id}\n"));
    }
    output.push_str(&format!(
        "Namespace: {}\n",
        fmt_opt(secret.metadata.namespace.as_deref())
    ));
    if let Some(kind) = secret.spec.kind.as_deref() {
        output.push_str(&format!("Kind: {kind}\n"));
    }
    if secret.spec.value.is_some() {
        output.push_str(&format!("Value: {REDACTED}\n"));
    }
    if !secret.metadata.labels.is_empty() {
        output.push_str("\nLabels:\n");
        for (key, value) in &secret.metadata.labels {
            output.push_str(&format!("  {key}: {value}\n"));
        }
    }
    if let Some(created) = secret.metadata.created_at {
        output.push_str(&format!("Created: {}\n", fmt_time(Some(created))));
    }
    Ok(output)
}
