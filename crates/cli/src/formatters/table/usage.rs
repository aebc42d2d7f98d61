//! Resource usage report formatter.
//!
//! In table mode the raw CSV is passed through untouched so it can be
//! redirected straight into a spreadsheet; JSON and YAML render the
//! parsed rows.

use anyhow::Result;
use vvp_client::models::ResourceUsageReport;

/// Format the usage report for table output: the CSV body as-is.
pub fn format_usage_report(report: &ResourceUsageReport) -> Result<String> {
    let mut output = report.csv_data.clone();
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
