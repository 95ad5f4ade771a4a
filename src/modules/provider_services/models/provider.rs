use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service provider on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ServiceProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            contact_email: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// Service offered by a provider, carrying its current list price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub service_provider_id: Uuid,
    pub price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(name: impl Into<String>, service_provider_id: Uuid, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            service_provider_id,
            price,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
