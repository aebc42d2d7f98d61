//! Namespace command implementation.

use anyhow::{Context, Result};

use crate::args::NamespaceCommand;
use crate::commands::{print_list, print_resource, yaml_detail};
use crate::formatters::table::namespaces::format_namespaces;
use crate::input::load_resource;
use vvp_client::models::Namespace;
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config, command: NamespaceCommand) -> Result<()> {
    match command {
        NamespaceCommand::List => {
            let namespaces = client
                .list_namespaces()
                .await
                .context("failed to list namespaces")?;
            print_list(&namespaces, config.output, |items| format_namespaces(items))?;
        }
        NamespaceCommand::Get { name } => {
            let namespace = client
                .get_namespace(&name)
                .await
                .context("failed to get namespace")?;
            print_resource(&namespace, config.output, yaml_detail)?;
        }
        NamespaceCommand::Create { file } => {
            let namespace: Namespace = load_resource(&file)?;
            let created = client
                .create_namespace(&namespace)
                .await
                .context("failed to create namespace")?;
            println!(
                "Namespace {} created successfully",
                created.metadata.display_name()
            );
        }
        NamespaceCommand::Update { name, file } => {
            let namespace: Namespace = load_resource(&file)?;
            let updated = client
                .update_namespace(&name, &namespace)
                .await
                .context("failed to update namespace")?;
            println!(
                "Namespace {} updated successfully",
                updated.metadata.display_name()
            );
        }
        NamespaceCommand::Delete { name } => {
            client
                .delete_namespace(&name)
                .await
                .context("failed to delete namespace")?;
            println!("Namespace {name} deleted successfully");
        }
    }

    Ok(())
}
