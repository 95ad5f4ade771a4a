pub mod user;

pub use user::{AccountManager, Customer, User};
