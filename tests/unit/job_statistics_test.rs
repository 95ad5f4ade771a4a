// Unit tests for the job statistics aggregator against a seeded in-memory
// job store.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use fabstat::core::DateRange;
use fabstat::execution::{InMemoryJobRepository, Job, JobState, JobType};
use fabstat::reports::JobStatisticsAggregator;

fn q1_2024() -> DateRange {
    DateRange::new(
        "2024-01-01".parse().unwrap(),
        "2024-03-31".parse().unwrap(),
    )
}

fn job_starting(
    job_id: &str,
    state: JobState,
    job_type: JobType,
    starting_date: DateTime<Utc>,
    completion_time: Option<f64>,
) -> Job {
    let mut job = Job::new(job_id, job_id, Uuid::new_v4(), job_type, starting_date);
    job.state = state;
    job.completion_time = completion_time;
    job
}

async fn seeded_aggregator(jobs: Vec<Job>) -> JobStatisticsAggregator {
    let repo = Arc::new(InMemoryJobRepository::new());
    for job in jobs {
        repo.insert(job).await;
    }
    JobStatisticsAggregator::new(repo)
}

#[tokio::test]
async fn test_mean_completion_times_per_type() {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        job_starting("JOB-1", JobState::Completed, JobType::Regular, start, Some(2.0)),
        job_starting("JOB-2", JobState::Completed, JobType::Regular, start, Some(4.0)),
        job_starting("JOB-3", JobState::Completed, JobType::Regular, start, Some(6.0)),
        job_starting("JOB-4", JobState::Active, JobType::WaferRun, start, None),
        job_starting("JOB-5", JobState::Delayed, JobType::WaferRun, start, None),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.total_jobs, 5);
    assert_eq!(result.avg_completion_time_regular, 4.0);
    // No completed wafer run: the mean is exactly zero, not absent
    assert_eq!(result.avg_completion_time_wafer_run, 0.0);
    assert_eq!(result.jobs_completed, 3);
    assert_eq!(result.jobs_active, 1);
    assert_eq!(result.jobs_delayed, 1);
    assert_eq!(result.jobs_created, 0);
    assert_eq!(result.jobs_failed, 0);
}

#[tokio::test]
async fn test_empty_range_zero_defaults() {
    let aggregator = seeded_aggregator(vec![]).await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.total_jobs, 0);
    assert_eq!(result.avg_completion_time_regular, 0.0);
    assert_eq!(result.avg_completion_time_wafer_run, 0.0);
}

#[tokio::test]
async fn test_jobs_outside_range_are_ignored() {
    let inside = Utc.with_ymd_and_hms(2024, 3, 31, 23, 0, 0).unwrap();
    let outside = Utc.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        job_starting("JOB-1", JobState::Active, JobType::Regular, inside, None),
        job_starting("JOB-2", JobState::Active, JobType::Regular, outside, None),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    // Selection is inclusive of the end date itself
    assert_eq!(result.total_jobs, 1);
    assert_eq!(result.jobs_active, 1);
}

#[tokio::test]
async fn test_completed_job_without_duration_excluded_from_mean() {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        job_starting("JOB-1", JobState::Completed, JobType::Regular, start, Some(3.0)),
        job_starting("JOB-2", JobState::Completed, JobType::Regular, start, None),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    // The duration-less job counts toward totals but not toward the mean
    assert_eq!(result.jobs_completed, 2);
    assert_eq!(result.avg_completion_time_regular, 3.0);
}
