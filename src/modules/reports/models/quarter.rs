use serde::{Deserialize, Serialize};

use crate::core::date_range::ymd;
use crate::core::{AppError, DateRange, Result};

/// Fixed three-month calendar bucket within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Calendar interval covered by this quarter in `year`.
    ///
    /// Q1 = Jan 1 – Mar 31, Q2 = Apr 1 – Jun 30, Q3 = Jul 1 – Sep 30,
    /// Q4 = Oct 1 – Dec 31. Years outside chrono's representable range
    /// fail with a validation error.
    pub fn date_range(self, year: i32) -> Result<DateRange> {
        let (start, end) = match self {
            Quarter::Q1 => (ymd(year, 1, 1)?, ymd(year, 3, 31)?),
            Quarter::Q2 => (ymd(year, 4, 1)?, ymd(year, 6, 30)?),
            Quarter::Q3 => (ymd(year, 7, 1)?, ymd(year, 9, 30)?),
            Quarter::Q4 => (ymd(year, 10, 1)?, ymd(year, 12, 31)?),
        };
        Ok(DateRange::new(start, end))
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quarter::Q1 => write!(f, "Q1"),
            Quarter::Q2 => write!(f, "Q2"),
            Quarter::Q3 => write!(f, "Q3"),
            Quarter::Q4 => write!(f, "Q4"),
        }
    }
}

impl std::str::FromStr for Quarter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Q1" => Ok(Quarter::Q1),
            "Q2" => Ok(Quarter::Q2),
            "Q3" => Ok(Quarter::Q3),
            "Q4" => Ok(Quarter::Q4),
            other => Err(AppError::invalid_quarter(other)),
        }
    }
}
