// Account models: platform users and the two roles layered on top of them.
//
// An account manager looks after zero or more service providers; a
// customer is assigned to at least one account manager. Both wrap a plain
// user record, which carries the activity timestamps the statistics engine
// cares about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform user identity plus activity timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: impl Into<String>, date_joined: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            first_name: None,
            last_name: None,
            date_joined,
            last_login: None,
        }
    }

    /// Display name, falling back to the username.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.username.clone(),
        }
    }
}

/// User responsible for one or more service providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountManager {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_provider_ids: Vec<Uuid>,
    pub is_active: bool,
}

impl AccountManager {
    pub fn new(user_id: Uuid, service_provider_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            service_provider_ids,
            is_active: true,
        }
    }
}

/// User ordering services, assigned to at least one account manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_manager_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(user_id: Uuid, account_manager_ids: Vec<Uuid>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            account_manager_ids,
            created_at,
        }
    }
}
