pub mod report_repository;
pub mod result_repository;

pub use report_repository::{InMemoryReportRepository, ReportRepository};
pub use result_repository::{InMemoryResultRepository, ResultRepository};
