//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render resources as tables (human), JSON, or YAML (machine).
//! - Keep empty-state handling consistent: tables print a human message
//!   ("No deployments found."), JSON and YAML print a valid empty list.
//!
//! Does NOT handle:
//! - Printing to stdout (formatters return strings; commands print).
//!
//! Invariants:
//! - Timestamps render as `YYYY-MM-DD HH:MM:SS` (UTC); missing values as "-".
//! - Secret payloads are redacted in table output only; JSON and YAML
//!   emit the document verbatim for piping into other tools.

pub mod json;
pub mod table;
pub mod yaml;

use chrono::{DateTime, Utc};

/// Placeholder for absent values in table output.
pub const MISSING: &str = "-";

/// Format an optional timestamp for table cells.
pub fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// An optional string cell, `"-"` when absent or empty.
pub fn fmt_opt(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}
