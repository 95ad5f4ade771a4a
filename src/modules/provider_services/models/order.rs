// Order model with its item lines.
//
// An order is placed by a customer, managed by one account manager and
// optionally linked to the job executing it. The order total is derived
// from its items and never edited directly; completed_at is stamped once,
// at the transition into Completed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::provider::Service;

/// Order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Submitted,
    InProgress,
    Completed,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Draft => write!(f, "draft"),
            OrderStatus::Submitted => write!(f, "submitted"),
            OrderStatus::InProgress => write!(f, "in_progress"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Customer order for provider services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub account_manager_id: Uuid,
    /// Job executing this order, once one is assigned
    pub job_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: OrderStatus,
    /// Derived from the order's items; see `OrderItem`
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(
        customer_id: Uuid,
        account_manager_id: Uuid,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            account_manager_id,
            job_id: None,
            title: title.into(),
            description: None,
            status: OrderStatus::default(),
            total_price: Decimal::ZERO,
            created_at,
            updated_at: created_at,
            completed_at: None,
        }
    }

    /// Move the order to `status`, stamping `completed_at` exactly once at
    /// the transition into Completed.
    pub fn transition_to(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        if status == OrderStatus::Completed
            && self.status != OrderStatus::Completed
            && self.completed_at.is_none()
        {
            self.completed_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }
}

/// Service line within an order, with the unit price snapshotted at
/// creation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Create an item for `service`; when no explicit price is given the
    /// service's current price is snapshotted.
    pub fn new(order_id: Uuid, service: &Service, quantity: i32, price: Option<Decimal>) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            service_id: service.id,
            quantity,
            price: price.unwrap_or(service.price),
            created_at: Utc::now(),
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
