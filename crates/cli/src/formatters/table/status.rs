//! Platform status detail formatter.

use anyhow::Result;
use vvp_client::models::PlatformStatus;

use crate::formatters::fmt_opt;

/// Format the platform status report as a detail view.
pub fn format_status(status: &PlatformStatus) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "Health: {}\n",
        fmt_opt(status.health.status.as_deref())
    ));
    if let Some(message) = status.health.message.as_deref() {
        output.push_str(&format!("Message: {message}\n"));
    }

    output.push_str("\nVersion:\n");
    output.push_str(&format!(
        "  Platform: {}\n",
        fmt_opt(status.version.platform.as_deref())
    ));
    output.push_str(&format!(
        "  Flink: {}\n",
        fmt_opt(status.version.flink.as_deref())
    ));
    if let Some(edition) = status.version.edition.as_deref() {
        output.push_str(&format!("  Edition: {edition}\n"));
    }
    if let Some(build_time) = status.version.build_time.as_deref() {
        output.push_str(&format!("  Build Time: {build_time}\n"));
    }

    if !status.components.is_empty() {
        output.push_str("\nComponents:\n");
        output.push_str(&format!(
            "  {:<25} {:<12} {:<15}\n",
            "NAME", "STATUS", "VERSION"
        ));
        for component in &status.components {
            output.push_str(&format!(
                "  {:<25} {:<12} {:<15}\n",
                fmt_opt(component.name.as_deref()),
                fmt_opt(component.status.as_deref()),
                fmt_opt(component.version.as_deref()),
            ));
            if let Some(message) = component.message.as_deref() {
                output.push_str(&format!("    {message}\n"));
            }
        }
    }

    if let Some(usage) = &status.resource_usage {
        output.push_str("\nResource Usage:\n");
        output.push_str(&format!("  Deployments: {}\n", usage.deployments));
        output.push_str(&format!("  Jobs: {}\n", usage.jobs));
        output.push_str(&format!("  Session Clusters: {}\n", usage.session_clusters));
        output.push_str(&format!("  Namespaces: {}\n", usage.namespaces));
    }

    Ok(output)
}
