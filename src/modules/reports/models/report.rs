// Report definition: a titled time window over one or more statistic
// kinds. Saving a report through the report service always recomputes the
// applicable result snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DateRange, Result};

use super::quarter::Quarter;

/// Which statistic families a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Job,
    Order,
    User,
    Combined,
}

impl ReportType {
    pub fn includes_jobs(self) -> bool {
        matches!(self, ReportType::Job | ReportType::Combined)
    }

    pub fn includes_orders(self) -> bool {
        matches!(self, ReportType::Order | ReportType::Combined)
    }

    pub fn includes_users(self) -> bool {
        matches!(self, ReportType::User | ReportType::Combined)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Job => write!(f, "job"),
            ReportType::Order => write!(f, "order"),
            ReportType::User => write!(f, "user"),
            ReportType::Combined => write!(f, "combined"),
        }
    }
}

/// Statistical report over a quarter-to-quarter window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub report_type: ReportType,
    pub quarter_from: Quarter,
    pub year_from: i32,
    pub quarter_to: Quarter,
    pub year_to: i32,
    pub created_by: Option<Uuid>,
    /// Opaque reference to an attached rendered document
    pub pdf_report: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        title: impl Into<String>,
        report_type: ReportType,
        quarter_from: Quarter,
        year_from: i32,
        quarter_to: Quarter,
        year_to: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            report_type,
            quarter_from,
            year_from,
            quarter_to,
            year_to,
            created_by: None,
            pdf_report: None,
            created_at: Utc::now(),
        }
    }

    /// Resolve both quarter endpoints and return the envelope
    /// [earliest start, latest end].
    ///
    /// The endpoints are deliberately not assumed to be ordered; a report
    /// whose "from" quarter lies after its "to" quarter still yields the
    /// full covering range.
    pub fn resolved_range(&self) -> Result<DateRange> {
        let from = self.quarter_from.date_range(self.year_from)?;
        let to = self.quarter_to.date_range(self.year_to)?;
        Ok(from.envelope(&to))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} {} - {} {})",
            self.title, self.report_type, self.year_from, self.quarter_from, self.year_to, self.quarter_to
        )
    }
}
