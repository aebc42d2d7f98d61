//! Resource usage report command implementation.
//!
//! When no window is given the report covers the last seven days ending
//! today (UTC). Table output is the raw CSV; JSON and YAML render the
//! parsed rows.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};

use crate::args::UsageCommand;
use crate::formatters::table::usage::format_usage_report;
use crate::formatters::{json, yaml};
use vvp_client::VvpClient;
use vvp_config::{Config, OutputFormat};

pub async fn run(client: &VvpClient, config: &Config, command: UsageCommand) -> Result<()> {
    match command {
        UsageCommand::Report { from, to } => {
            let to = to.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
            let from = from
                .unwrap_or_else(|| (Utc::now() - Duration::days(7)).format("%Y-%m-%d").to_string());

            let report = client
                .get_resource_usage_report(Some(&from), Some(&to))
                .await
                .context("failed to get resource usage report")?;

            let rendered = match config.output {
                OutputFormat::Table => format_usage_report(&report)?,
                OutputFormat::Json => json::format(&report.parse_csv()?)?,
                OutputFormat::Yaml => yaml::format(&report.parse_csv()?)?,
            };
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
