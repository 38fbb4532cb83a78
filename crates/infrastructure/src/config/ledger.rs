//! Ledger rendering configuration

use application::{ApplicationError, CurrencyFormat};
use serde::{Deserialize, Serialize};

pub(super) const DEFAULT_CURRENCY_LABEL: &str = "Rp";
pub(super) const DEFAULT_THOUSANDS_SEPARATOR: char = '.';

/// How amounts are printed and how uncategorised records are filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Currency prefix (default: "Rp")
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Digit group separator (default: '.')
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Category for extracted records without one (default: "lainnya")
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_currency_label() -> String {
    DEFAULT_CURRENCY_LABEL.to_string()
}

const fn default_thousands_separator() -> char {
    DEFAULT_THOUSANDS_SEPARATOR
}

fn default_category() -> String {
    domain::DEFAULT_CATEGORY.to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency_label: default_currency_label(),
            thousands_separator: default_thousands_separator(),
            default_category: default_category(),
        }
    }
}

impl LedgerConfig {
    /// Currency format for the summary service
    #[must_use]
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            label: self.currency_label.clone(),
            thousands_separator: self.thousands_separator,
        }
    }

    pub(super) fn validate(&self) -> Result<(), ApplicationError> {
        if self.currency_label.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "ledger.currency_label must not be empty".to_string(),
            ));
        }
        if self.thousands_separator.is_ascii_digit() {
            return Err(ApplicationError::Configuration(format!(
                "ledger.thousands_separator must not be a digit, got '{}'",
                self.thousands_separator
            )));
        }
        if self.default_category.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "ledger.default_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
