//! Namespaces table formatter.

use anyhow::Result;
use vvp_client::models::Namespace;

use crate::formatters::{fmt_opt, fmt_time};

/// Format namespaces as a table.
pub fn format_namespaces(namespaces: &[Namespace]) -> Result<String> {
    let mut output = String::new();

    if namespaces.is_empty() {
        output.push_str("No namespaces found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<15} {:<20}\n",
        "NAME", "STATE", "CREATED"
    ));
    output.push_str(&format!(
        "{:<30} {:<15} {:<20}\n",
        "====", "=====", "======="
    ));

    for namespace in namespaces {
        let state = namespace
            .status
            .as_ref()
            .and_then(|s| s.state.as_deref());
        output.push_str(&format!(
            "{:<30} {:<15} {:<20}\n",
            fmt_opt(namespace.metadata.name.as_deref()),
            fmt_opt(state),
            fmt_time(namespace.metadata.created_at),
        ));
    }

    Ok(output)
}
