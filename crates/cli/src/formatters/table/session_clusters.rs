//! Session clusters table formatter.

use anyhow::Result;
use vvp_client::models::SessionCluster;

use crate::formatters::{fmt_opt, MISSING};

/// Format session clusters as a table.
pub fn format_session_clusters(clusters: &[SessionCluster]) -> Result<String> {
    let mut output = String::new();

    if clusters.is_empty() {
        output.push_str("No session clusters found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<15} {:<12} {:<14} {:<14}\n",
        "NAME", "NAMESPACE", "STATE", "TASKMANAGERS", "FLINK VERSION"
    ));
    output.push_str(&format!(
        "{:<30} {:<15} {:<12} {:<14} {:<14}\n",
        "====", "=========", "=====", "============", "============="
    ));

    for cluster in clusters {
        let state = cluster
            .effective_state()
            .unwrap_or_else(|| MISSING.to_string());
        let task_managers = cluster
            .spec
            .number_of_task_managers
            .map(|n| n.to_string())
            .unwrap_or_else(|| MISSING.to_string());
        output.push_str(&format!(
            "{:<30} {:<15} {:<12} {:<14} {:<14}\n",
            fmt_opt(cluster.metadata.name.as_deref()),
            fmt_opt(cluster.metadata.namespace.as_deref()),
            state,
            task_managers,
            fmt_opt(cluster.spec.flink_version.as_deref()),
        ));
    }

    Ok(output)
}
