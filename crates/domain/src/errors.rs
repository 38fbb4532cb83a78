//! Domain-level errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Amount is negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Sum of amounts exceeds the representable range
    #[error("Amount overflow while adding {0}")]
    AmountOverflow(String),

    /// Interval whose start lies after its end
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Date components that do not form a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid range error
    pub const fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidDateRange { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_carries_bounds() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 12).unwrap();
        match DomainError::invalid_range(start, end) {
            DomainError::InvalidDateRange { start: s, end: e } => {
                assert_eq!(s, start);
                assert_eq!(e, end);
            },
            _ => unreachable!("Expected InvalidDateRange error"),
        }
    }

    #[test]
    fn invalid_range_error_message() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 12).unwrap();
        let err = DomainError::invalid_range(start, end);
        assert_eq!(
            err.to_string(),
            "Invalid date range: 2025-08-15 is after 2025-08-12"
        );
    }

    #[test]
    fn invalid_amount_error_message() {
        let err = DomainError::InvalidAmount("-5".to_string());
        assert_eq!(err.to_string(), "Invalid amount: -5");
    }

    #[test]
    fn invalid_date_error_message() {
        let err = DomainError::InvalidDate("2025-02-31".to_string());
        assert_eq!(err.to_string(), "Invalid date: 2025-02-31");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("category is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: category is empty");
    }
}
