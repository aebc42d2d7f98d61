//! Deployment command implementation.
//!
//! Responsibilities:
//! - List/get/create/update/delete deployments.
//! - State transitions: start (RUNNING), stop (CANCELLED), suspend
//!   (SUSPENDED) via partial PATCH.
//! - `delete --force`: cancel first when needed, then delete.
//!
//! Invariants:
//! - Forced deletion never polls; cancellation is asynchronous and the
//!   user is told so.

use anyhow::{Context, Result};

use crate::args::DeploymentCommand;
use crate::commands::{print_list, print_resource, resolve_namespace, yaml_detail};
use crate::formatters::table::deployments::format_deployments;
use crate::input::load_resource;
use vvp_client::models::{Deployment, DeploymentState};
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config, command: DeploymentCommand) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        DeploymentCommand::List => {
            let deployments = client
                .list_deployments(&namespace)
                .await
                .context("failed to list deployments")?;
            print_list(&deployments, config.output, |items| {
                format_deployments(items)
            })?;
        }
        DeploymentCommand::Get { name } => {
            let deployment = client
                .get_deployment(&namespace, &name)
                .await
                .context("failed to get deployment")?;
            print_resource(&deployment, config.output, yaml_detail)?;
        }
        DeploymentCommand::Create { file } => {
            let deployment: Deployment = load_resource(&file)?;
            let created = client
                .create_deployment(&namespace, &deployment)
                .await
                .context("failed to create deployment")?;
            println!(
                "Deployment {} created successfully",
                created.metadata.display_name()
            );
        }
        DeploymentCommand::Update { name, file } => {
            let deployment: Deployment = load_resource(&file)?;
            let updated = client
                .update_deployment(&namespace, &name, &deployment)
                .await
                .context("failed to update deployment")?;
            println!(
                "Deployment {} updated successfully",
                updated.metadata.display_name()
            );
        }
        DeploymentCommand::Delete { name, force } => {
            if force {
                cancel_if_needed(client, &namespace, &name).await?;
            }
            client
                .delete_deployment(&namespace, &name)
                .await
                .context("failed to delete deployment")?;
            println!("Deployment {name} deleted successfully");
        }
        DeploymentCommand::Start { name } => {
            transition(client, &namespace, &name, DeploymentState::Running).await?;
        }
        DeploymentCommand::Stop { name } => {
            transition(client, &namespace, &name, DeploymentState::Cancelled).await?;
        }
        DeploymentCommand::Suspend { name } => {
            transition(client, &namespace, &name, DeploymentState::Suspended).await?;
        }
    }

    Ok(())
}

async fn transition(
    client: &VvpClient,
    namespace: &str,
    name: &str,
    state: DeploymentState,
) -> Result<()> {
    client
        .update_deployment_state(namespace, name, state)
        .await
        .context("failed to update deployment state")?;
    println!("Deployment {name} state updated to {state}");
    Ok(())
}

/// Cancel the deployment before a forced delete, unless its desired
/// state already is CANCELLED. The delete proceeds either way.
async fn cancel_if_needed(client: &VvpClient, namespace: &str, name: &str) -> Result<()> {
    let deployment = client
        .get_deployment(namespace, name)
        .await
        .context("failed to get deployment")?;

    if deployment.spec.state != Some(DeploymentState::Cancelled) {
        println!("Cancelling deployment {name} before deletion...");
        client
            .update_deployment_state(namespace, name, DeploymentState::Cancelled)
            .await
            .context("failed to cancel deployment")?;
        println!("Deployment {name} transitioned to CANCELLED state");
        println!(
            "Note: The deployment may take some time to fully cancel. \
             If deletion fails, wait a moment and try again."
        );
    }
    Ok(())
}
