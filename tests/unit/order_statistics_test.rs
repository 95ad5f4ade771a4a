// Unit tests for the order statistics aggregator against a seeded
// in-memory order store.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use fabstat::core::DateRange;
use fabstat::provider_services::{InMemoryOrderRepository, Order, OrderStatus};
use fabstat::reports::OrderStatisticsAggregator;

fn q1_2024() -> DateRange {
    DateRange::new(
        "2024-01-01".parse().unwrap(),
        "2024-03-31".parse().unwrap(),
    )
}

fn order_created(
    created_at: DateTime<Utc>,
    status: OrderStatus,
    total_price: Decimal,
) -> Order {
    let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4(), "fixture order", created_at);
    order.status = status;
    order.total_price = total_price;
    order
}

async fn seeded_aggregator(orders: Vec<Order>) -> OrderStatisticsAggregator {
    let repo = Arc::new(InMemoryOrderRepository::new());
    for order in orders {
        repo.insert_order(order).await;
    }
    OrderStatisticsAggregator::new(repo)
}

#[tokio::test]
async fn test_revenue_and_average_order_value() {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let mut completed = order_created(created, OrderStatus::Submitted, dec!(100.00));
    completed.transition_to(
        OrderStatus::Completed,
        Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap(),
    );

    let aggregator = seeded_aggregator(vec![
        completed,
        order_created(created, OrderStatus::Submitted, dec!(50.00)),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.total_orders, 2);
    assert_eq!(result.total_revenue, dec!(150.00));
    assert_eq!(result.average_order_value, dec!(75.00));
    assert_eq!(result.orders_completed, 1);
    assert_eq!(result.orders_submitted, 1);
    // One completed order, four days from creation to completion
    assert_eq!(result.avg_processing_time, Some(4.0));
}

#[tokio::test]
async fn test_average_order_value_is_rounded() {
    let created = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        order_created(created, OrderStatus::Draft, dec!(100.00)),
        order_created(created, OrderStatus::Draft, dec!(100.00)),
        order_created(created, OrderStatus::Draft, dec!(50.00)),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.average_order_value, dec!(83.33));
}

#[tokio::test]
async fn test_no_completed_orders_leaves_processing_time_unset() {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        order_created(created, OrderStatus::Submitted, dec!(10.00)),
        order_created(created, OrderStatus::InProgress, dec!(20.00)),
        order_created(created, OrderStatus::Cancelled, dec!(30.00)),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    // None, not zero: unlike the job means, absence is kept distinguishable
    assert_eq!(result.avg_processing_time, None);
    assert_eq!(result.orders_submitted, 1);
    assert_eq!(result.orders_in_progress, 1);
    assert_eq!(result.orders_cancelled, 1);
}

#[tokio::test]
async fn test_empty_range_zero_defaults() {
    let aggregator = seeded_aggregator(vec![]).await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.total_orders, 0);
    assert_eq!(result.total_revenue, Decimal::ZERO);
    assert_eq!(result.average_order_value, Decimal::ZERO);
    assert_eq!(result.avg_processing_time, None);
}

#[tokio::test]
async fn test_orders_outside_range_are_ignored() {
    let inside = Utc.with_ymd_and_hms(2024, 3, 31, 22, 0, 0).unwrap();
    let outside = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
    let aggregator = seeded_aggregator(vec![
        order_created(inside, OrderStatus::Draft, dec!(40.00)),
        order_created(outside, OrderStatus::Draft, dec!(999.00)),
    ])
    .await;

    let result = aggregator.aggregate(Uuid::new_v4(), &q1_2024()).await.unwrap();

    assert_eq!(result.total_orders, 1);
    assert_eq!(result.total_revenue, dec!(40.00));
}
