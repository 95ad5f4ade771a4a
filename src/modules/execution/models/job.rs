// Job model for tracking execution of provider orders.
//
// A job executes one or more orders for the same service provider. Jobs
// move through a small state machine and record how long a completed run
// took, in days.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job execution lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Created,
    Active,
    Completed,
    Failed,
    Delayed,
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Created => write!(f, "created"),
            JobState::Active => write!(f, "active"),
            JobState::Completed => write!(f, "completed"),
            JobState::Failed => write!(f, "failed"),
            JobState::Delayed => write!(f, "delayed"),
        }
    }
}

/// Kind of execution run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Regular,
    WaferRun,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::Regular => write!(f, "regular"),
            JobType::WaferRun => write!(f, "wafer_run"),
        }
    }
}

/// Represents a job executing customer orders for one service provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique short job token (e.g. "JOB-00042")
    pub job_id: String,
    pub job_name: String,
    pub service_provider_id: Uuid,
    pub state: JobState,
    pub job_type: JobType,
    pub starting_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    /// Time in days spent to complete the job
    pub completion_time: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(
        job_id: impl Into<String>,
        job_name: impl Into<String>,
        service_provider_id: Uuid,
        job_type: JobType,
        starting_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            job_id: job_id.into(),
            job_name: job_name.into(),
            service_provider_id,
            state: JobState::Created,
            job_type,
            starting_date,
            end_date: None,
            completion_time: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the job completed at `end_date` and record its duration.
    pub fn complete(&mut self, end_date: DateTime<Utc>) {
        self.state = JobState::Completed;
        self.end_date = Some(end_date);
        self.updated_at = end_date;
        if self.completion_time.is_none() {
            self.completion_time = self.calculate_completion_time();
        }
    }

    /// Duration in days between start and end, if the end date is known.
    pub fn calculate_completion_time(&self) -> Option<f64> {
        self.end_date
            .map(|end| (end - self.starting_date).num_milliseconds() as f64 / 86_400_000.0)
    }
}
