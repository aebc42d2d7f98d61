//! Job operations (read-only; jobs are managed through their deployment).

use crate::client::VvpClient;
use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{Job, JobList};

impl VvpClient {
    /// List all jobs in a namespace.
    pub async fn list_jobs(&self, namespace: &str) -> Result<Vec<Job>> {
        let path = format!("/api/v1/namespaces/{}/jobs", encode_path_segment(namespace));
        let list: JobList = self.get_json(&path).await?;
        Ok(list.items)
    }

    /// Get a job by ID.
    pub async fn get_job(&self, namespace: &str, job_id: &str) -> Result<Job> {
        let path = format!(
            "/api/v1/namespaces/{}/jobs/{}",
            encode_path_segment(namespace),
            encode_path_segment(job_id)
        );
        self.get_json(&path).await
    }
}
