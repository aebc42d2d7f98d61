//! Job resource models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Metadata;

/// A job spawned by a deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: JobSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Job status. The server populates at most one of the detail records,
/// matching `state`; they are kept as separate optional fields so the wire
/// shape round-trips exactly, with [`JobStatus::detail`] as the typed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<JobRunningDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<JobFailedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<JobCancelledDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<JobFinishedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<JobSuspendedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminating: Option<JobTerminatingDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRunningDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFailedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobCancelledDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFinishedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSuspendedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTerminatingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<DateTime<Utc>>,
}

/// Typed view over the populated status detail record.
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatusDetail<'a> {
    Running(&'a JobRunningDetails),
    Failed(&'a JobFailedDetails),
    Cancelled(&'a JobCancelledDetails),
    Finished(&'a JobFinishedDetails),
    Suspended(&'a JobSuspendedDetails),
    Terminating(&'a JobTerminatingDetails),
}

impl JobStatus {
    /// The populated detail record, if any. When the server ever sets more
    /// than one, the first in lifecycle order wins.
    pub fn detail(&self) -> Option<JobStatusDetail<'_>> {
        if let Some(d) = &self.running {
            return Some(JobStatusDetail::Running(d));
        }
        if let Some(d) = &self.failed {
            return Some(JobStatusDetail::Failed(d));
        }
        if let Some(d) = &self.cancelled {
            return Some(JobStatusDetail::Cancelled(d));
        }
        if let Some(d) = &self.finished {
            return Some(JobStatusDetail::Finished(d));
        }
        if let Some(d) = &self.suspended {
            return Some(JobStatusDetail::Suspended(d));
        }
        if let Some(d) = &self.terminating {
            return Some(JobStatusDetail::Terminating(d));
        }
        None
    }
}

impl Job {
    /// Flink job ID, available only while running.
    pub fn flink_job_id(&self) -> Option<&str> {
        self.status
            .as_ref()?
            .running
            .as_ref()?
            .job_id
            .as_deref()
    }

    /// Start time of the current run.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref()?.running.as_ref()?.start_time
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub items: Vec<Job>,
}
