// Result snapshots, one kind per entity family. Each is 1:1 with its
// report (keyed by report id) and fully overwritten on every recompute.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregated job statistics for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReportResult {
    pub report_id: Uuid,
    pub total_jobs: i64,
    /// Mean completion time in days for regular jobs; 0.0 when no
    /// completed regular job carries a duration
    pub avg_completion_time_regular: f64,
    /// Mean completion time in days for wafer-run jobs; 0.0 when no
    /// completed wafer-run job carries a duration
    pub avg_completion_time_wafer_run: f64,
    pub jobs_created: i64,
    pub jobs_active: i64,
    pub jobs_completed: i64,
    pub jobs_failed: i64,
    pub jobs_delayed: i64,
}

/// Aggregated order statistics for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReportResult {
    pub report_id: Uuid,
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    pub orders_draft: i64,
    pub orders_submitted: i64,
    pub orders_in_progress: i64,
    pub orders_completed: i64,
    pub orders_cancelled: i64,
    /// Mean days from creation to completion over completed orders; None
    /// when no order in range completed (contrast with the job means,
    /// which zero-default)
    pub avg_processing_time: Option<f64>,
}

/// Aggregated user activity statistics for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReportResult {
    pub report_id: Uuid,
    pub total_active_users: i64,
    pub new_customers: i64,
    pub active_account_managers: i64,
    /// User id behind the account manager with the most orders in range
    pub top_account_manager: Option<Uuid>,
    /// User id behind the customer with the most orders in range
    pub top_customer: Option<Uuid>,
    pub total_orders_by_top_manager: i64,
    pub total_revenue_by_top_manager: Decimal,
}

/// Snapshots produced by one recompute pass; kinds not covered by the
/// report type stay None
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStatistics {
    pub job: Option<JobReportResult>,
    pub order: Option<OrderReportResult>,
    pub user: Option<UserReportResult>,
}
