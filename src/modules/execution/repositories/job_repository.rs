use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{DateRange, Result};
use crate::modules::execution::models::Job;

/// Read-only query surface over execution jobs.
///
/// The statistics engine only ever reads jobs; ownership of the job
/// lifecycle stays with the execution subsystem.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Jobs whose starting date falls inside the range (inclusive).
    async fn jobs_started_between(&self, range: &DateRange) -> Result<Vec<Job>>;
}

/// In-memory job store, the reference collaborator for tests and the demo
/// runner.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.push(job);
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn jobs_started_between(&self, range: &DateRange) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .filter(|job| range.contains(job.starting_date))
            .cloned()
            .collect())
    }
}
