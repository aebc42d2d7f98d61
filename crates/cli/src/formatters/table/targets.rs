//! Deployment targets table formatter.

use anyhow::Result;
use vvp_client::models::DeploymentTarget;

use crate::formatters::{fmt_opt, fmt_time};

/// Format deployment targets as a table.
pub fn format_targets(targets: &[DeploymentTarget]) -> Result<String> {
    let mut output = String::new();

    if targets.is_empty() {
        output.push_str("No deployment targets found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<15} {:<15} {:<20}\n",
        "NAME", "NAMESPACE", "STATE", "CREATED"
    ));
    output.push_str(&format!(
        "{:<30} {:<15} {:<15} {:<20}\n",
        "====", "=========", "=====", "======="
    ));

    for target in targets {
        let state = target.status.as_ref().and_then(|s| s.state.as_deref());
        output.push_str(&format!(
            "{:<30} {:<15} {:<15} {:<20}\n",
            fmt_opt(target.metadata.name.as_deref()),
            fmt_opt(target.metadata.namespace.as_deref()),
            fmt_opt(state),
            fmt_time(target.metadata.created_at),
        ));
    }

    Ok(output)
}
