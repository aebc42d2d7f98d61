//! Platform status command implementation.

use anyhow::{Context, Result};

use crate::commands::print_resource;
use crate::formatters::table::status::format_status;
use vvp_client::VvpClient;
use vvp_config::Config;

pub async fn run(client: &VvpClient, config: &Config) -> Result<()> {
    let status = client
        .get_status()
        .await
        .context("failed to get platform status")?;
    print_resource(&status, config.output, format_status)?;
    Ok(())
}
