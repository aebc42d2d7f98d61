//! Job command implementation (read-only).

use anyhow::{Context, Result};

use crate::args::JobCommand;
use crate::commands::{print_list, print_resource, resolve_namespace};
use crate::formatters::table::jobs::{format_job_detail, format_jobs};
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config, command: JobCommand) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        JobCommand::List => {
            let jobs = client
                .list_jobs(&namespace)
                .await
                .context("failed to list jobs")?;
            print_list(&jobs, config.output, |items| format_jobs(items))?;
        }
        JobCommand::Get { job_id } => {
            let job = client
                .get_job(&namespace, &job_id)
                .await
                .context("failed to get job")?;
            print_resource(&job, config.output, format_job_detail)?;
        }
    }

    Ok(())
}
