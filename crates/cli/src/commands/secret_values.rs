//! Secret value command implementation.
//!
//! Table output redacts payloads; JSON and YAML print the document
//! verbatim so it can be piped.

use anyhow::{Context, Result};

use crate::args::SecretValueCommand;
use crate::commands::{print_list, print_resource, resolve_namespace};
use crate::formatters::table::secret_values::{
    format_secret_value_detail, format_secret_values,
};
use crate::input::load_resource;
use vvp_client::models::SecretValue;
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config, command: SecretValueCommand) -> Result<()> {
    let namespace = resolve_namespace(config)?;

    match command {
        SecretValueCommand::List => {
            let secrets = client
                .list_secret_values(&namespace)
                .await
                .context("failed to list secret values")?;
            print_list(&secrets, config.output, |items| format_secret_values(items))?;
        }
        SecretValueCommand::Get { name } => {
            let secret = client
                .get_secret_value(&namespace, &name)
                .await
                .context("failed to get secret value")?;
            print_resource(&secret, config.output, format_secret_value_detail)?;
        }
        SecretValueCommand::Create { file } => {
            let secret: SecretValue = load_resource(&file)?;
            let created = client
                .create_secret_value(&namespace, &secret)
                .await
                .context("failed to create secret value")?;
            println!(
                "Secret value '{}' created successfully",
                created.metadata.display_name()
            );
        }
        SecretValueCommand::Update { name, file } => {
            let secret: SecretValue = load_resource(&file)?;
            let updated = client
                .update_secret_value(&namespace, &name, &secret)
                .await
                .context("failed to update secret value")?;
            println!(
                "Secret value '{}' updated successfully",
                updated.metadata.display_name()
            );
        }
        SecretValueCommand::Delete { name } => {
            client
                .delete_secret_value(&namespace, &name)
                .await
                .context("failed to delete secret value")?;
            println!("Secret value '{name}' deleted successfully");
        }
    }

    Ok(())
}
