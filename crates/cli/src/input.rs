//! Resource file loading.
//!
//! Create/update commands take `-f <file>` with a resource document in
//! JSON or YAML. JSON is tried first; on failure the file is parsed as
//! YAML, and only then is an error reported.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load a resource document from a JSON or YAML file.
pub fn load_resource<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if let Ok(resource) = serde_json::from_str(&contents) {
        return Ok(resource);
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("{} is neither valid JSON nor valid YAML", path.display()))
}
