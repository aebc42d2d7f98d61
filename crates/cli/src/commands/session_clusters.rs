//! Session cluster command implementation.
//!
//! `update` PATCHes a partial spec; `upsert` PUTs a full replacement,
//! creating the cluster when it does not exist.

use anyhow::{Context, Result};

use crate::args::SessionClusterCommand;
use crate::commands::{print_list, print_resource, resolve_namespace, yaml_detail};
use crate::formatters::table::session_clusters::format_session_clusters;
use crate::input::load_resource;
use vvp_client::models::SessionCluster;
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(
    client: &VvpClient,
    config: &Config,
    command: SessionClusterCommand,
) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        SessionClusterCommand::List => {
            let clusters = client
                .list_session_clusters(&namespace)
                .await
                .context("failed to list session clusters")?;
            print_list(&clusters, config.output, |items| {
                format_session_clusters(items)
            })?;
        }
        SessionClusterCommand::Get { name } => {
            let cluster = client
                .get_session_cluster(&namespace, &name)
                .await
                .context("failed to get session cluster")?;
            print_resource(&cluster, config.output, yaml_detail)?;
        }
        SessionClusterCommand::Create { file } => {
            let cluster: SessionCluster = load_resource(&file)?;
            let created = client
                .create_session_cluster(&namespace, &cluster)
                .await
                .context("failed to create session cluster")?;
            println!(
                "Session cluster '{}' created successfully",
                created.metadata.display_name()
            );
        }
        SessionClusterCommand::Update { name, file } => {
            let cluster: SessionCluster = load_resource(&file)?;
            let updated = client
                .update_session_cluster(&namespace, &name, &cluster)
                .await
                .context("failed to update session cluster")?;
            println!(
                "Session cluster '{}' updated successfully",
                updated.metadata.display_name()
            );
        }
        SessionClusterCommand::Upsert { name, file } => {
            let cluster: SessionCluster = load_resource(&file)?;
            client
                .upsert_session_cluster(&namespace, &name, &cluster)
                .await
                .context("failed to upsert session cluster")?;
            println!("Session cluster '{name}' replaced successfully");
        }
        SessionClusterCommand::Delete { name } => {
            client
                .delete_session_cluster(&namespace, &name)
                .await
                .context("failed to delete session cluster")?;
            println!("Session cluster '{name}' deleted successfully");
        }
    }

    Ok(())
}
