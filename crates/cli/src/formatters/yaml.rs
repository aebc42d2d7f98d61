//! YAML output.

use anyhow::Result;
use serde::Serialize;

/// Render a value as a YAML document.
pub fn format<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
