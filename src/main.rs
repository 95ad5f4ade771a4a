use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fabstat::accounts::{
    AccountManager, AccountRepository, Customer, InMemoryAccountRepository, User,
};
use fabstat::config::Config;
use fabstat::execution::{InMemoryJobRepository, Job, JobType};
use fabstat::provider_services::{
    InMemoryOrderRepository, Order, OrderItem, OrderStatus, Service, ServiceProvider,
};
use fabstat::reports::{
    InMemoryReportRepository, InMemoryResultRepository, JobStatisticsAggregator,
    OrderStatisticsAggregator, Quarter, Report, ReportService, ReportType,
    UserActivityAggregator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fabstat=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Fabstat Quarterly Statistics Engine");
    tracing::info!("Environment: {}", config.app.env);

    // Seed the in-memory collaborator stores with a small demo dataset
    let jobs = Arc::new(InMemoryJobRepository::new());
    let orders = Arc::new(InMemoryOrderRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::new());

    let provider = ServiceProvider::new("Helios Foundry");
    let service = Service::new(
        "MPW slot",
        provider.id,
        Decimal::new(120000, 2), // 1200.00
    );

    let joined = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
    let mut manager_user = User::new("mreyes", joined);
    manager_user.last_login = Some(Utc.with_ymd_and_hms(2024, 2, 12, 9, 30, 0).unwrap());
    let manager = AccountManager::new(manager_user.id, vec![provider.id]);

    let mut customer_user = User::new("tanaka-lab", joined);
    customer_user.last_login = Some(Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap());
    let customer = Customer::new(customer_user.id, vec![manager.id], joined);

    accounts.insert_user(manager_user.clone()).await;
    accounts.insert_user(customer_user).await;
    accounts.insert_manager(manager.clone()).await;
    accounts.insert_customer(customer.clone()).await;

    let created = Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap();
    let mut order = Order::new(customer.id, manager.id, "Sensor ASIC batch", created);
    order.transition_to(OrderStatus::Submitted, created);
    let order_id = order.id;
    orders.insert_order(order).await;
    orders
        .add_item(OrderItem::new(order_id, &service, 2, None))
        .await?;
    orders
        .update_status(
            order_id,
            OrderStatus::Completed,
            Utc.with_ymd_and_hms(2024, 2, 4, 11, 0, 0).unwrap(),
        )
        .await?;

    let mut job = Job::new(
        "JOB-0001",
        "February MPW run",
        provider.id,
        JobType::WaferRun,
        Utc.with_ymd_and_hms(2024, 1, 20, 8, 0, 0).unwrap(),
    );
    job.complete(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap());
    jobs.insert(job).await;

    // Wire the statistics engine
    let results = Arc::new(InMemoryResultRepository::new());
    let report_service = ReportService::new(
        Arc::new(InMemoryReportRepository::new()),
        results,
        JobStatisticsAggregator::new(jobs),
        OrderStatisticsAggregator::new(orders.clone()),
        UserActivityAggregator::new(accounts.clone(), orders),
    );

    let report = Report::new(
        "Q1 2024 platform overview",
        ReportType::Combined,
        Quarter::Q1,
        2024,
        Quarter::Q1,
        2024,
    );
    let statistics = report_service.save_and_recompute(&report).await?;

    if let Some(job_stats) = &statistics.job {
        tracing::info!(
            total_jobs = job_stats.total_jobs,
            avg_wafer_run_days = job_stats.avg_completion_time_wafer_run,
            "Job statistics"
        );
    }
    if let Some(order_stats) = &statistics.order {
        tracing::info!(
            total_orders = order_stats.total_orders,
            total_revenue = %order_stats.total_revenue,
            "Order statistics"
        );
    }
    if let Some(user_stats) = &statistics.user {
        let top_manager = match user_stats.top_account_manager {
            Some(user_id) => accounts
                .find_user(user_id)
                .await?
                .map(|user| user.full_name())
                .unwrap_or_else(|| user_id.to_string()),
            None => "none".to_string(),
        };
        tracing::info!(
            active_users = user_stats.total_active_users,
            top_manager = %top_manager,
            "User statistics"
        );
    }

    Ok(())
}
