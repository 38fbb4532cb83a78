//! Inclusive calendar date interval

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An inclusive range of calendar days
///
/// Both bounds belong to the interval and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawInterval> for DateInterval {
    type Error = DomainError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateInterval {
    /// Create an interval, rejecting a start that lies after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Interval covering exactly one day
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Interval covering the whole calendar month that contains `date`
    pub fn month_of(date: NaiveDate) -> Result<Self, DomainError> {
        let start = date
            .with_day(1)
            .ok_or_else(|| DomainError::InvalidDate(date.to_string()))?;
        let end = match start.checked_add_months(Months::new(1)) {
            Some(next_month) => next_month
                .pred_opt()
                .ok_or_else(|| DomainError::InvalidDate(next_month.to_string()))?,
            // Only December of the last representable year ends up here
            None => NaiveDate::from_ymd_opt(start.year(), 12, 31)
                .ok_or_else(|| DomainError::InvalidDate(start.to_string()))?,
        };
        Ok(Self { start, end })
    }

    /// Interval covering January 1st through December 31st of `year`
    pub fn year(year: i32) -> Result<Self, DomainError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| DomainError::InvalidDate(format!("year {year}")))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| DomainError::InvalidDate(format!("year {year}")))?;
        Ok(Self { start, end })
    }

    /// First day of the interval
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the interval (bounds included)
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both bounds
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the interval spans a single day
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
