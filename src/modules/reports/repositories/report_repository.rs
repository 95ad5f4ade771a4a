use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::reports::models::Report;

/// Storage surface for report definitions.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert the report, or replace the stored definition with the same id.
    async fn save(&self, report: &Report) -> Result<Report>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>>;
}

/// In-memory report store for tests and the demo runner.
#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &Report) -> Result<Report> {
        let mut reports = self.reports.write().await;
        match reports.iter_mut().find(|stored| stored.id == report.id) {
            Some(stored) => *stored = report.clone(),
            None => reports.push(report.clone()),
        }
        Ok(report.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|report| report.id == id).cloned())
    }
}
