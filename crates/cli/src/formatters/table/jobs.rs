//! Jobs table and detail formatters.

use anyhow::Result;
use vvp_client::models::job::JobStatus;
use vvp_client::models::{Job, JobStatusDetail};

use crate::formatters::{fmt_opt, fmt_time};

/// Format jobs as a table.
pub fn format_jobs(jobs: &[Job]) -> Result<String> {
    let mut output = String::new();

    if jobs.is_empty() {
        output.push_str("No jobs found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<38} {:<20} {:<12} {:<12} {:<38} {:<20}\n",
        "JOB ID", "NAME", "NAMESPACE", "STATE", "DEPLOYMENT ID", "START TIME"
    ));
    output.push_str(&format!(
        "{:<38} {:<20} {:<12} {:<12} {:<38} {:<20}\n",
        "======", "====", "=========", "=====", "=============", "=========="
    ));

    for job in jobs {
        let state = job.status.as_ref().and_then(|s| s.state.as_deref());
        output.push_str(&format!(
            "{:<38} {:<20} {:<12} {:<12} {:<38} {:<20}\n",
            fmt_opt(job.metadata.id.as_deref()),
            fmt_opt(job.metadata.name.as_deref()),
            fmt_opt(job.metadata.namespace.as_deref()),
            fmt_opt(state),
            fmt_opt(job.spec.deployment_id.as_deref()),
            fmt_time(job.start_time()),
        ));
    }

    Ok(output)
}

/// Format one job as a field-per-line detail view, including whichever
/// status detail record the server populated.
pub fn format_job_detail(job: &Job) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("Job ID: {}\n", fmt_opt(job.metadata.id.as_deref())));
    if let Some(name) = job.metadata.name.as_deref() {
        output.push_str(&format!("Name: {name}\n"));
    }
    output.push_str(&format!(
        "Namespace: {}\n",
        fmt_opt(job.metadata.namespace.as_deref())
    ));
    let state = job.status.as_ref().and_then(|s| s.state.as_deref());
    output.push_str(&format!("State: {}\n", fmt_opt(state)));
    output.push_str(&format!(
        "Deployment ID: {}\n",
        fmt_opt(job.spec.deployment_id.as_deref())
    ));

    if let Some(status) = &job.status {
        append_status_detail(&mut output, status);
    }

    Ok(output)
}

fn append_status_detail(output: &mut String, status: &JobStatus) {
    match status.detail() {
        Some(JobStatusDetail::Running(details)) => {
            output.push_str("\nRunning Status:\n");
            if let Some(start) = details.start_time {
                output.push_str(&format!("  Start Time: {}\n", fmt_time(Some(start))));
            }
            if let Some(job_id) = details.job_id.as_deref() {
                output.push_str(&format!("  Flink Job ID: {job_id}\n"));
            }
        }
        Some(JobStatusDetail::Failed(details)) => {
            output.push_str("\nFailure:\n");
            if let Some(time) = details.failure_time {
                output.push_str(&format!("  Failure Time: {}\n", fmt_time(Some(time))));
            }
            if let Some(reason) = details.reason.as_deref() {
                output.push_str(&format!("  Reason: {reason}\n"));
            }
            if let Some(message) = details.message.as_deref() {
                output.push_str(&format!("  Message: {message}\n"));
            }
        }
        Some(JobStatusDetail::Cancelled(details)) => {
            if let Some(time) = details.cancellation_time {
                output.push_str(&format!("\nCancelled At: {}\n", fmt_time(Some(time))));
            }
        }
        Some(JobStatusDetail::Finished(details)) => {
            if let Some(time) = details.completion_time {
                output.push_str(&format!("\nCompleted At: {}\n", fmt_time(Some(time))));
            }
        }
        Some(JobStatusDetail::Suspended(details)) => {
            if let Some(time) = details.suspension_time {
                output.push_str(&format!("\nSuspended At: {}\n", fmt_time(Some(time))));
            }
        }
        Some(JobStatusDetail::Terminating(details)) => {
            if let Some(time) = details.transition_time {
                output.push_str(&format!("\nTerminating Since: {}\n", fmt_time(Some(time))));
            }
        }
        None => {}
    }
}
