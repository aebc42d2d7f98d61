//! Platform status and resource usage operations.

use crate::client::VvpClient;
use crate::error::{ClientError, Result};
use crate::models::{PlatformStatus, ResourceUsageReport};

impl VvpClient {
    /// Get the platform health, version, and component status.
    pub async fn get_status(&self) -> Result<PlatformStatus> {
        self.get_json("/api/v1/status").await
    }

    /// Fetch the resource usage report as CSV.
    ///
    /// `from` and `to` are optional time bounds, passed through verbatim
    /// as query parameters. The endpoint is an optional platform feature;
    /// a 404 maps to [`ClientError::UsageReportUnavailable`].
    pub async fn get_resource_usage_report(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<ResourceUsageReport> {
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("from", from));
        }
        if let Some(to) = to {
            query.push(("to", to));
        }
        match self.get_text("/api/v1/status/resourceusage", &query).await {
            Ok(body) => Ok(ResourceUsageReport::new(body)),
            Err(ClientError::Api { status: 404, .. }) => {
                Err(ClientError::UsageReportUnavailable)
            }
            Err(err) => Err(err),
        }
    }
}
