use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::core::{DateRange, Result};
use crate::modules::provider_services::models::{Order, OrderStatus};
use crate::modules::provider_services::repositories::OrderRepository;
use crate::modules::reports::models::OrderReportResult;

/// Computes order volume and revenue statistics over a resolved report
/// range.
pub struct OrderStatisticsAggregator {
    orders: Arc<dyn OrderRepository>,
}

impl OrderStatisticsAggregator {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Aggregate orders created inside `range` into a snapshot for
    /// `report_id`.
    ///
    /// Revenue and mean order value zero-default on an empty range. The
    /// mean processing time stays None when no order in range completed:
    /// "no completions" and "completed instantly" must stay
    /// distinguishable.
    pub async fn aggregate(&self, report_id: Uuid, range: &DateRange) -> Result<OrderReportResult> {
        let orders = self.orders.orders_created_between(range).await?;

        debug!(total = orders.len(), %range, "Aggregating order statistics");

        let total_orders = orders.len() as i64;
        let total_revenue: Decimal = orders.iter().map(|order| order.total_price).sum();
        let average_order_value = if total_orders > 0 {
            (total_revenue / Decimal::from(total_orders)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        Ok(OrderReportResult {
            report_id,
            total_orders,
            total_revenue,
            average_order_value,
            orders_draft: count_status(&orders, OrderStatus::Draft),
            orders_submitted: count_status(&orders, OrderStatus::Submitted),
            orders_in_progress: count_status(&orders, OrderStatus::InProgress),
            orders_completed: count_status(&orders, OrderStatus::Completed),
            orders_cancelled: count_status(&orders, OrderStatus::Cancelled),
            avg_processing_time: mean_processing_time(&orders),
        })
    }
}

fn count_status(orders: &[Order], status: OrderStatus) -> i64 {
    orders.iter().filter(|order| order.status == status).count() as i64
}

/// Mean days from creation to completion over completed orders with a
/// completion stamp; None when no order qualifies.
fn mean_processing_time(orders: &[Order]) -> Option<f64> {
    let durations: Vec<f64> = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .filter_map(|order| {
            order
                .completed_at
                .map(|done| (done - order.created_at).num_milliseconds() as f64 / 86_400_000.0)
        })
        .collect();

    if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    }
}
