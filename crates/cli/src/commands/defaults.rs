//! Deployment defaults command implementation.
//!
//! The server's verbs are asymmetric: `replace` PUTs a full
//! [`DeploymentDefaults`] document, while `update` PATCHes with a
//! [`SecretValue`] document.

use anyhow::{Context, Result};

use crate::args::DeploymentDefaultsCommand;
use crate::commands::{print_resource, resolve_namespace, yaml_detail};
use crate::input::load_resource;
use vvp_client::models::{DeploymentDefaults, SecretValue};
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(
    client: &VvpClient,
    config: &Config,
    command: DeploymentDefaultsCommand,
) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        DeploymentDefaultsCommand::Get => {
            let defaults = client
                .get_deployment_defaults(&namespace)
                .await
                .context("failed to get deployment defaults")?;
            print_resource(&defaults, config.output, yaml_detail)?;
        }
        DeploymentDefaultsCommand::Replace { file } => {
            let defaults: DeploymentDefaults = load_resource(&file)?;
            let replaced = client
                .replace_deployment_defaults(&namespace, &defaults)
                .await
                .context("failed to replace deployment defaults")?;
            println!("Deployment defaults replaced successfully");
            print_resource(&replaced, config.output, yaml_detail)?;
        }
        DeploymentDefaultsCommand::Update { file } => {
            let secret: SecretValue = load_resource(&file)?;
            let updated = client
                .update_deployment_defaults(&namespace, &secret)
                .await
                .context("failed to update deployment defaults")?;
            println!("Deployment defaults updated successfully");
            print_resource(&updated, config.output, yaml_detail)?;
        }
    }

    Ok(())
}
