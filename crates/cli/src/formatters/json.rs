//! JSON output.

use anyhow::Result;
use serde::Serialize;

/// Pretty-print a value as two-space-indented JSON.
pub fn format<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
