//! Command implementations, one module per resource group.

pub mod defaults;
pub mod deployments;
pub mod jobs;
pub mod namespaces;
pub mod savepoints;
pub mod secret_values;
pub mod session_clusters;
pub mod status;
pub mod targets;
pub mod usage;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::formatters::{json, yaml};
use vvp_config::{Config, OutputFormat};

/// Namespace for namespaced commands.
///
/// The `--namespace` flag and `VVP_DEFAULT_NAMESPACE` are already merged
/// into the config by the loader, so only the resolved default matters
/// here.
pub fn resolve_namespace(config: &Config) -> Result<String> {
    match config.default_namespace() {
        Some(ns) => Ok(ns.to_string()),
        None => bail!(
            "namespace not specified. Provide --namespace or set default.namespace in \
             ~/.vvpctl/config.yaml (or VVP_DEFAULT_NAMESPACE)"
        ),
    }
}

/// Print a list of resources in the configured format.
pub fn print_list<T, F>(items: &[T], format: OutputFormat, table: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&[T]) -> Result<String>,
{
    let rendered = match format {
        OutputFormat::Json => json::format(&items)?,
        OutputFormat::Yaml => yaml::format(&items)?,
        OutputFormat::Table => table(items)?,
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Print a single resource in the configured format.
pub fn print_resource<T, F>(item: &T, format: OutputFormat, table: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> Result<String>,
{
    let rendered = match format {
        OutputFormat::Json => json::format(item)?,
        OutputFormat::Yaml => yaml::format(item)?,
        OutputFormat::Table => table(item)?,
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Table-mode fallback for document-shaped resources without a dedicated
/// detail view: render the YAML document, as `get` users usually want the
/// full spec.
pub fn yaml_detail<T: Serialize>(item: &T) -> Result<String> {
    yaml::format(item)
}
