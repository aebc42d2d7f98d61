//! Resource usage report (CSV).

use std::collections::BTreeMap;

use crate::error::{ClientError, Result};

/// Raw CSV usage report as returned by the platform.
///
/// The body may start with `#`-prefixed comment lines and contain blank
/// lines; [`ResourceUsageReport::parse_csv`] strips those before parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceUsageReport {
    pub csv_data: String,
}

impl ResourceUsageReport {
    pub fn new(csv_data: String) -> Self {
        Self { csv_data }
    }

    /// Parse the report into one map per data row, keyed by the header
    /// row. Returns an empty vector when there are no data rows.
    pub fn parse_csv(&self) -> Result<Vec<BTreeMap<String, String>>> {
        let filtered: Vec<&str> = self
            .csv_data
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .collect();

        if filtered.is_empty() {
            return Ok(Vec::new());
        }

        let joined = filtered.join("\n").into_bytes();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(joined.as_slice());

        let headers = reader
            .headers()
            .map_err(|e| ClientError::InvalidResponse(format!("failed to parse CSV: {e}")))?
            .clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| ClientError::InvalidResponse(format!("failed to parse CSV: {e}")))?;
            let mut row = BTreeMap::new();
            for (i, header) in headers.iter().enumerate() {
                if let Some(value) = record.get(i) {
                    row.insert(header.to_string(), value.to_string());
                }
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// Header names in file order, skipping comments and blank lines.
    pub fn headers(&self) -> Vec<String> {
        self.csv_data
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.split(',').map(|h| h.trim().to_string()).collect())
            .unwrap_or_default()
    }
}
