//! Savepoint command implementation.
//!
//! Creation targets exactly one of a deployment or a job; the client
//! enforces that before any request is sent.

use anyhow::{Context, Result};

use crate::args::SavepointCommand;
use crate::commands::{print_list, print_resource, resolve_namespace};
use crate::formatters::table::savepoints::{format_savepoint_detail, format_savepoints};
use vvp_client::models::{Metadata, SavepointCreationRequest, SavepointSpec};
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config, command: SavepointCommand) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        SavepointCommand::List => {
            let savepoints = client
                .list_savepoints(&namespace)
                .await
                .context("failed to list savepoints")?;
            print_list(&savepoints, config.output, |items| format_savepoints(items))?;
        }
        SavepointCommand::Get { savepoint_id } => {
            let savepoint = client
                .get_savepoint(&namespace, &savepoint_id)
                .await
                .context("failed to get savepoint")?;
            print_resource(&savepoint, config.output, format_savepoint_detail)?;
        }
        SavepointCommand::Create {
            deployment_id,
            job_id,
            name,
        } => {
            let request = SavepointCreationRequest {
                metadata: Metadata {
                    name,
                    namespace: Some(namespace.clone()),
                    ..Default::default()
                },
                spec: SavepointSpec {
                    deployment_id,
                    job_id,
                },
            };
            let savepoint = client
                .create_savepoint(&namespace, &request)
                .await
                .context("failed to create savepoint")?;
            println!(
                "Savepoint '{}' created successfully",
                savepoint.metadata.display_name()
            );
        }
        SavepointCommand::Delete { savepoint_id } => {
            client
                .delete_savepoint(&namespace, &savepoint_id)
                .await
                .context("failed to delete savepoint")?;
            println!("Savepoint '{savepoint_id}' deleted successfully");
        }
    }

    Ok(())
}
