// Reports module: quarter resolution, the three aggregators and the
// orchestrating report service

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    JobReportResult, OrderReportResult, Quarter, Report, ReportStatistics, ReportType,
    UserReportResult,
};
pub use repositories::{
    InMemoryReportRepository, InMemoryResultRepository, ReportRepository, ResultRepository,
};
pub use services::{
    JobStatisticsAggregator, OrderStatisticsAggregator, ReportService, UserActivityAggregator,
};
