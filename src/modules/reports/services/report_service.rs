use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::reports::models::{Report, ReportStatistics};
use crate::modules::reports::repositories::{ReportRepository, ResultRepository};

use super::job_statistics::JobStatisticsAggregator;
use super::order_statistics::OrderStatisticsAggregator;
use super::user_statistics::UserActivityAggregator;

/// Orchestrates report persistence and statistics recomputation.
///
/// Every save runs a full recompute of the result kinds implied by the
/// report type; there is no dirty tracking. Recomputation is idempotent:
/// against unchanged underlying data it always converges to the same
/// stored snapshots, so calling it arbitrarily often is safe.
pub struct ReportService {
    reports: Arc<dyn ReportRepository>,
    results: Arc<dyn ResultRepository>,
    job_stats: JobStatisticsAggregator,
    order_stats: OrderStatisticsAggregator,
    user_stats: UserActivityAggregator,
}

impl ReportService {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        results: Arc<dyn ResultRepository>,
        job_stats: JobStatisticsAggregator,
        order_stats: OrderStatisticsAggregator,
        user_stats: UserActivityAggregator,
    ) -> Self {
        Self {
            reports,
            results,
            job_stats,
            order_stats,
            user_stats,
        }
    }

    /// Persist the report (insert-or-update), then recompute and store all
    /// applicable result snapshots.
    ///
    /// The range is resolved up front so an invalid period aborts before
    /// anything is written. Even a metadata-only edit recomputes every
    /// applicable kind.
    pub async fn save_and_recompute(&self, report: &Report) -> Result<ReportStatistics> {
        report.resolved_range()?;

        let saved = self.reports.save(report).await?;
        info!(report_id = %saved.id, report_type = %saved.report_type, "Report saved");

        self.recompute_statistics(&saved).await
    }

    /// Recompute the result snapshots for an already-persisted report.
    ///
    /// All applicable aggregates are computed before any snapshot is
    /// written, so an aggregator failure leaves every stored result row
    /// untouched.
    pub async fn recompute_statistics(&self, report: &Report) -> Result<ReportStatistics> {
        let range = report.resolved_range()?;

        let mut statistics = ReportStatistics::default();

        if report.report_type.includes_jobs() {
            statistics.job = Some(self.job_stats.aggregate(report.id, &range).await?);
        }
        if report.report_type.includes_orders() {
            statistics.order = Some(self.order_stats.aggregate(report.id, &range).await?);
        }
        if report.report_type.includes_users() {
            statistics.user = Some(self.user_stats.aggregate(report.id, &range).await?);
        }

        if let Some(job) = &statistics.job {
            self.results.upsert_job_result(job.clone()).await?;
            info!(report_id = %report.id, total_jobs = job.total_jobs, "Job snapshot stored");
            if job.total_jobs == 0 {
                warn!(report_id = %report.id, %range, "No jobs in report range");
            }
        }
        if let Some(order) = &statistics.order {
            self.results.upsert_order_result(order.clone()).await?;
            info!(
                report_id = %report.id,
                total_orders = order.total_orders,
                total_revenue = %order.total_revenue,
                "Order snapshot stored"
            );
        }
        if let Some(user) = &statistics.user {
            self.results.upsert_user_result(user.clone()).await?;
            info!(
                report_id = %report.id,
                active_users = user.total_active_users,
                "User snapshot stored"
            );
        }

        Ok(statistics)
    }
}
