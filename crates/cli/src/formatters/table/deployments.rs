//! Deployments table formatter.

use anyhow::Result;
use vvp_client::models::Deployment;

use crate::formatters::{fmt_opt, fmt_time, MISSING};

/// Format deployments as a table.
pub fn format_deployments(deployments: &[Deployment]) -> Result<String> {
    let mut output = String::new();

    if deployments.is_empty() {
        output.push_str("No deployments found.\n");
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

    for deployment in deployments {
        let state = deployment
            .effective_state()
            .unwrap_or_else(|| MISSING.to_string());
        output.push_str(&format!(
            "{:<30} {:<15} {:<15} {:<20}\n",
            fmt_opt(deployment.metadata.name.as_deref()),
            fmt_opt(deployment.metadata.namespace.as_deref()),
            state,
            fmt_time(deployment.metadata.created_at),
        ));
    }

    Ok(output)
}
