use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::core::{DateRange, Result};
use crate::modules::execution::models::{Job, JobState, JobType};
use crate::modules::execution::repositories::JobRepository;
use crate::modules::reports::models::JobReportResult;

/// Computes job throughput statistics over a resolved report range.
pub struct JobStatisticsAggregator {
    jobs: Arc<dyn JobRepository>,
}

impl JobStatisticsAggregator {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }

    /// Aggregate jobs whose starting date falls inside `range` into a
    /// snapshot for `report_id`.
    ///
    /// The per-type mean completion times cover completed jobs carrying a
    /// recorded duration and fall back to 0.0 when none qualify. The
    /// zero fallback (rather than None) is a deliberate contrast with the
    /// order aggregator's processing-time field.
    pub async fn aggregate(&self, report_id: Uuid, range: &DateRange) -> Result<JobReportResult> {
        let jobs = self.jobs.jobs_started_between(range).await?;

        debug!(total = jobs.len(), %range, "Aggregating job statistics");

        Ok(JobReportResult {
            report_id,
            total_jobs: jobs.len() as i64,
            avg_completion_time_regular: mean_completion_time(&jobs, JobType::Regular),
            avg_completion_time_wafer_run: mean_completion_time(&jobs, JobType::WaferRun),
            jobs_created: count_state(&jobs, JobState::Created),
            jobs_active: count_state(&jobs, JobState::Active),
            jobs_completed: count_state(&jobs, JobState::Completed),
            jobs_failed: count_state(&jobs, JobState::Failed),
            jobs_delayed: count_state(&jobs, JobState::Delayed),
        })
    }
}

fn count_state(jobs: &[Job], state: JobState) -> i64 {
    jobs.iter().filter(|job| job.state == state).count() as i64
}

fn mean_completion_time(jobs: &[Job], job_type: JobType) -> f64 {
    let durations: Vec<f64> = jobs
        .iter()
        .filter(|job| job.state == JobState::Completed && job.job_type == job_type)
        .filter_map(|job| job.completion_time)
        .collect();

    if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    }
}
