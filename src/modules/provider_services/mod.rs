// Provider services module: providers, their services and customer orders

pub mod models;
pub mod repositories;

pub use models::{Order, OrderItem, OrderStatus, Service, ServiceProvider};
pub use repositories::{InMemoryOrderRepository, OrderRepository};
