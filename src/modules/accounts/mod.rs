// Accounts module: users and the manager/customer roles built on them

pub mod models;
pub mod repositories;

pub use models::{AccountManager, Customer, User};
pub use repositories::{AccountRepository, InMemoryAccountRepository};
