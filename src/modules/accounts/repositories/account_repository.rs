use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::{DateRange, Result};
use crate::modules::accounts::models::{AccountManager, Customer, User};

/// Read-only query surface over users, account managers and customers.
///
/// `all_account_managers` and `all_customers` must enumerate in a stable,
/// deterministic order; the top-performer selection depends on it for its
/// first-wins tie-break. The in-memory implementation yields insertion
/// order.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Users whose last login falls inside the range (inclusive).
    async fn users_active_between(&self, range: &DateRange) -> Result<Vec<User>>;

    /// Customers whose underlying user joined inside the range (inclusive).
    async fn customers_joined_between(&self, range: &DateRange) -> Result<Vec<Customer>>;

    /// Every account manager, in stable enumeration order.
    async fn all_account_managers(&self) -> Result<Vec<AccountManager>>;

    /// Every customer, in stable enumeration order.
    async fn all_customers(&self) -> Result<Vec<Customer>>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;
}

/// In-memory account store, the reference collaborator for tests and the
/// demo runner.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    users: RwLock<Vec<User>>,
    managers: RwLock<Vec<AccountManager>>,
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        self.users.write().await.push(user);
    }

    pub async fn insert_manager(&self, manager: AccountManager) {
        self.managers.write().await.push(manager);
    }

    pub async fn insert_customer(&self, customer: Customer) {
        self.customers.write().await.push(customer);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn users_active_between(&self, range: &DateRange) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|user| user.last_login.is_some_and(|login| range.contains(login)))
            .cloned()
            .collect())
    }

    async fn customers_joined_between(&self, range: &DateRange) -> Result<Vec<Customer>> {
        let users = self.users.read().await;
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|customer| {
                users
                    .iter()
                    .find(|user| user.id == customer.user_id)
                    .is_some_and(|user| range.contains(user.date_joined))
            })
            .cloned()
            .collect())
    }

    async fn all_account_managers(&self) -> Result<Vec<AccountManager>> {
        Ok(self.managers.read().await.clone())
    }

    async fn all_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}
