pub mod quarter;
pub mod report;
pub mod results;

pub use quarter::Quarter;
pub use report::{Report, ReportType};
pub use results::{JobReportResult, OrderReportResult, ReportStatistics, UserReportResult};
