//! Savepoints table and detail formatters.

use anyhow::Result;
use vvp_client::models::Savepoint;

use crate::formatters::{fmt_opt, fmt_time};

/// Format savepoints as a table.
pub fn format_savepoints(savepoints: &[Savepoint]) -> Result<String> {
    let mut output = String::new();

    if savepoints.is_empty() {
        output.push_str("No savepoints found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<38} {:<20} {:<12} {:<12} {:<38} {:<38} {:<20}\n",
        "SAVEPOINT ID", "NAME", "NAMESPACE", "STATE", "DEPLOYMENT ID", "JOB ID", "CREATED"
    ));
    output.push_str(&format!(
        "{:<38} {:<20} {:<12} {:<12} {:<38} {:<38} {:<20}\n",
        "============", "====", "=========", "=====", "=============", "======", "======="
    ));

    for savepoint in savepoints {
        let state = savepoint.status.as_ref().and_then(|s| s.state.as_deref());
        output.push_str(&format!(
            "{:<38} {:<20} {:<12} {:<12} {:<38} {:<38} {:<20}\n",
            fmt_opt(savepoint.metadata.id.as_deref()),
            fmt_opt(savepoint.metadata.name.as_deref()),
            fmt_opt(savepoint.metadata.namespace.as_deref()),
            fmt_opt(state),
            fmt_opt(savepoint.spec.deployment_id.as_deref()),
            fmt_opt(savepoint.spec.job_id.as_deref()),
            fmt_time(savepoint.metadata.created_at),
        ));
    }

    Ok(output)
}

/// Format one savepoint as a field-per-line detail view.
pub fn format_savepoint_detail(savepoint: &Savepoint) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "Savepoint ID: {}\n",
        fmt_opt(savepoint.metadata.id.as_deref())
    ));
    output.push_str(&format!(
        "Namespace: {}\n",
        fmt_opt(savepoint.metadata.namespace.as_deref())
    ));
    let state = savepoint.status.as_ref().and_then(|s| s.state.as_deref());
    output.push_str(&format!("State: {}\n", fmt_opt(state)));
    if let Some(deployment_id) = savepoint.spec.deployment_id.as_deref() {
        output.push_str(&format!("Deployment ID: {deployment_id}\n"));
    }
    if let Some(job_id) = savepoint.spec.job_id.as_deref() {
        output.push_str(&format!("Job ID: {job_id}\n"));
    }

    if let Some(status) = &savepoint.status {
        if let Some(completed) = &status.completed {
            output.push_str("\nCompleted:\n");
            if let Some(location) = completed.location.as_deref() {
                output.push_str(&format!("  Location: {location}\n"));
            }
            if let Some(time) = completed.time {
                output.push_str(&format!("  Time: {}\n", fmt_time(Some(time))));
            }
        }
        if let Some(failed) = &status.failed {
            output.push_str("\nFailed:\n");
            if let Some(reason) = failed.reason.as_deref() {
                output.push_str(&format!("  Reason: {reason}\n"));
            }
            if let Some(message) = failed.message.as_deref() {
                output.push_str(&format!("  Message: {message}\n"));
            }
            if let Some(time) = failed.time {
                output.push_str(&format!("  Time: {}\n", fmt_time(Some(time))));
            }
        }
    }

    Ok(output)
}
