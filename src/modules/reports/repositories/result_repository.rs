use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::reports::models::{JobReportResult, OrderReportResult, UserReportResult};

/// Storage surface for the three result snapshot kinds.
///
/// Each kind holds at most one row per report; the report id is the upsert
/// key. Implementations must enforce that uniqueness so a repeated save of
/// the same report overwrites rather than duplicates.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn upsert_job_result(&self, result: JobReportResult) -> Result<JobReportResult>;

    async fn upsert_order_result(&self, result: OrderReportResult) -> Result<OrderReportResult>;

    async fn upsert_user_result(&self, result: UserReportResult) -> Result<UserReportResult>;

    async fn find_job_result(&self, report_id: Uuid) -> Result<Option<JobReportResult>>;

    async fn find_order_result(&self, report_id: Uuid) -> Result<Option<OrderReportResult>>;

    async fn find_user_result(&self, report_id: Uuid) -> Result<Option<UserReportResult>>;
}

/// In-memory result store. Keying each map by report id makes the upsert
/// race-safe under the writer lock.
#[derive(Default)]
pub struct InMemoryResultRepository {
    job_results: RwLock<HashMap<Uuid, JobReportResult>>,
    order_results: RwLock<HashMap<Uuid, OrderReportResult>>,
    user_results: RwLock<HashMap<Uuid, UserReportResult>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows per kind (job, order, user).
    pub async fn row_counts(&self) -> (usize, usize, usize) {
        (
            self.job_results.read().await.len(),
            self.order_results.read().await.len(),
            self.user_results.read().await.len(),
        )
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn upsert_job_result(&self, result: JobReportResult) -> Result<JobReportResult> {
        self.job_results
            .write()
            .await
            .insert(result.report_id, result.clone());
        Ok(result)
    }

    async fn upsert_order_result(&self, result: OrderReportResult) -> Result<OrderReportResult> {
        self.order_results
            .write()
            .await
            .insert(result.report_id, result.clone());
        Ok(result)
    }

    async fn upsert_user_result(&self, result: UserReportResult) -> Result<UserReportResult> {
        self.user_results
            .write()
            .await
            .insert(result.report_id, result.clone());
        Ok(result)
    }

    async fn find_job_result(&self, report_id: Uuid) -> Result<Option<JobReportResult>> {
        Ok(self.job_results.read().await.get(&report_id).cloned())
    }

    async fn find_order_result(&self, report_id: Uuid) -> Result<Option<OrderReportResult>> {
        Ok(self.order_results.read().await.get(&report_id).cloned())
    }

    async fn find_user_result(&self, report_id: Uuid) -> Result<Option<UserReportResult>> {
        Ok(self.user_results.read().await.get(&report_id).cloned())
    }
}
