//! Deployment target command implementation.

use anyhow::{Context, Result};

use crate::args::DeploymentTargetCommand;
use crate::commands::{print_list, print_resource, resolve_namespace, yaml_detail};
use crate::formatters::table::targets::format_targets;
use crate::input::load_resource;
use vvp_client::models::DeploymentTarget;
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(
    client: &VvpClient,
    config: &Config,
    command: DeploymentTargetCommand,
) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        DeploymentTargetCommand::List => {
            let targets = client
                .list_deployment_targets(&namespace)
                .await
                .context("failed to list deployment targets")?;
            print_list(&targets, config.output, |items| format_targets(items))?;
        }
        DeploymentTargetCommand::Get { name } => {
            let target = client
                .get_deployment_target(&namespace, &name)
                .await
                .context("failed to get deployment target")?;
            print_resource(&target, config.output, yaml_detail)?;
        }
        DeploymentTargetCommand::Create { file } => {
            let target: DeploymentTarget = load_resource(&file)?;
            let created = client
                .create_deployment_target(&namespace, &target)
                .await
                .context("failed to create deployment target")?;
            println!(
                "Deployment target {} created successfully",
                created.metadata.display_name()
            );
        }
        DeploymentTargetCommand::Update { name, file } => {
            let target: DeploymentTarget = load_resource(&file)?;
            let updated = client
                .update_deployment_target(&namespace, &name, &target)
                .await
                .context("failed to update deployment target")?;
            println!(
                "Deployment target {} updated successfully",
                updated.metadata.display_name()
            );
        }
        DeploymentTargetCommand::Delete { name } => {
            client
                .delete_deployment_target(&namespace, &name)
                .await
                .context("failed to delete deployment target")?;
            println!("Deployment target {name} deleted successfully");
        }
    }

    Ok(())
}
