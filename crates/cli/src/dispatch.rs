//! Routes parsed commands to their handlers.
//!
//! The REST client is built once from the resolved configuration and
//! shared by reference across handlers.

use anyhow::{Context, Result};

use crate::args::{Cli, Commands};
use crate::commands;
use vvp_client::VvpClient;
use vvp_config::Config;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let client = VvpClient::builder()
        .from_config(&config)
        .build()
        .context("failed to build API client")?;

    match cli.command {
        Commands::Deployment { command } => {
            commands::deployments::run(&client, &config, command).await
        }
        Commands::Namespace { command } => {
            commands::namespaces::run(&client, &config, command).await
        }
        Commands::DeploymentTarget { command } => {
            commands::targets::run(&client, &config, command).await
        }
        Commands::SessionCluster { command } => {
            commands::session_clusters::run(&client, &config, command).await
        }
        Commands::Job { command } => commands::jobs::run(&client, &config, command).await,
        Commands::Savepoint { command } => {
            commands::savepoints::run(&client, &config, command).await
        }
        Commands::SecretValue { command } => {
            commands::secret_values::run(&client, &config, command).await
        }
        Commands::DeploymentDefaults { command } => {
            commands::defaults::run(&client, &config, command).await
        }
        Commands::Status => commands::status::run(&client, &config).await,
        Commands::Usage { command } => commands::usage::run(&client, &config, command).await,
    }
}
