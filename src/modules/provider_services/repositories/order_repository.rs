use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::{AppError, DateRange, Result};
use crate::modules::provider_services::models::{Order, OrderItem, OrderStatus};

/// Read-only query surface over customer orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders created inside the range (inclusive).
    async fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>>;

    /// Orders managed by `account_manager_id`, created inside the range.
    async fn orders_by_manager_between(
        &self,
        account_manager_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Order>>;

    /// Orders placed by `customer_id`, created inside the range.
    async fn orders_by_customer_between(
        &self,
        customer_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Order>>;
}

/// In-memory order store, the reference collaborator for tests and the
/// demo runner. Also carries the item lines so the derived order total can
/// be maintained on every item mutation.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
    items: RwLock<Vec<OrderItem>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_order(&self, order: Order) {
        self.orders.write().await.push(order);
    }

    /// Add an item line and recompute the parent order's total as
    /// sum(quantity × price) over all of its items.
    pub async fn add_item(&self, item: OrderItem) -> Result<()> {
        let order_id = item.order_id;
        self.items.write().await.push(item);
        self.recompute_total(order_id).await
    }

    /// Move an order to `status` through the model's transition rules.
    pub async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))?;
        order.transition_to(status, now);
        Ok(())
    }

    async fn recompute_total(&self, order_id: Uuid) -> Result<()> {
        let total: Decimal = self
            .items
            .read()
            .await
            .iter()
            .filter(|item| item.order_id == order_id)
            .map(|item| item.subtotal())
            .sum();

        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))?;
        order.total_price = total;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|order| range.contains(order.created_at))
            .cloned()
            .collect())
    }

    async fn orders_by_manager_between(
        &self,
        account_manager_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|order| {
                order.account_manager_id == account_manager_id && range.contains(order.created_at)
            })
            .cloned()
            .collect())
    }

    async fn orders_by_customer_between(
        &self,
        customer_id: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|order| order.customer_id == customer_id && range.contains(order.created_at))
            .cloned()
            .collect())
    }
}
