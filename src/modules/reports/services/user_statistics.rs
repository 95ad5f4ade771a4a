use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::core::{DateRange, Result};
use crate::modules::accounts::repositories::AccountRepository;
use crate::modules::provider_services::repositories::OrderRepository;
use crate::modules::reports::models::UserReportResult;

/// Computes user activity statistics and top performers over a resolved
/// report range.
pub struct UserActivityAggregator {
    accounts: Arc<dyn AccountRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl UserActivityAggregator {
    pub fn new(accounts: Arc<dyn AccountRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self { accounts, orders }
    }

    /// Aggregate user activity inside `range` into a snapshot for
    /// `report_id`.
    ///
    /// Top performers are selected by walking the repository's stable
    /// enumeration order and keeping the first entry with the strictly
    /// greatest order count. Ties therefore go to the earlier-enumerated
    /// manager/customer and are never broken by revenue. When nobody has
    /// an order in range both top fields stay None.
    pub async fn aggregate(&self, report_id: Uuid, range: &DateRange) -> Result<UserReportResult> {
        let active_users = self.accounts.users_active_between(range).await?;
        let new_customers = self.accounts.customers_joined_between(range).await?;

        let active_user_ids: HashSet<Uuid> = active_users.iter().map(|user| user.id).collect();
        let managers = self.accounts.all_account_managers().await?;
        let active_account_managers = managers
            .iter()
            .filter(|manager| active_user_ids.contains(&manager.user_id))
            .count() as i64;

        debug!(
            active_users = active_users.len(),
            managers = managers.len(),
            %range,
            "Aggregating user statistics"
        );

        let mut top_account_manager: Option<Uuid> = None;
        let mut total_orders_by_top_manager = 0i64;
        let mut total_revenue_by_top_manager = Decimal::ZERO;

        for manager in &managers {
            let manager_orders = self
                .orders
                .orders_by_manager_between(manager.id, range)
                .await?;
            let order_count = manager_orders.len() as i64;
            let revenue: Decimal = manager_orders.iter().map(|order| order.total_price).sum();

            if order_count > total_orders_by_top_manager {
                top_account_manager = Some(manager.user_id);
                total_orders_by_top_manager = order_count;
                total_revenue_by_top_manager = revenue;
            }
        }

        let mut top_customer: Option<Uuid> = None;
        let mut top_customer_orders = 0i64;

        for customer in &self.accounts.all_customers().await? {
            let order_count = self
                .orders
                .orders_by_customer_between(customer.id, range)
                .await?
                .len() as i64;

            if order_count > top_customer_orders {
                top_customer = Some(customer.user_id);
                top_customer_orders = order_count;
            }
        }

        Ok(UserReportResult {
            report_id,
            total_active_users: active_users.len() as i64,
            new_customers: new_customers.len() as i64,
            active_account_managers,
            top_account_manager,
            top_customer,
            total_orders_by_top_manager,
            total_revenue_by_top_manager,
        })
    }
}
