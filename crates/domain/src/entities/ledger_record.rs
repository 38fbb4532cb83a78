//! Ledger record entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Amount, TransactionKind};

/// Category used when the user does not name one
pub const DEFAULT_CATEGORY: &str = "lainnya";

/// How a record reached the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    /// Explicit `/pengeluaran` or `/pemasukan` command
    #[default]
    Command,
    /// Free-form chat text run through extraction
    Text,
    /// Receipt photo run through extraction
    Photo,
    /// Transcribed voice note run through extraction
    Voice,
}

impl RecordSource {
    /// Suffix used in confirmation messages ("... dari foto tercatat!")
    #[must_use]
    pub const fn confirmation_suffix(&self) -> &'static str {
        match self {
            Self::Command | Self::Text => "",
            Self::Photo => " dari foto",
            Self::Voice => " dari voice note",
        }
    }
}

/// A single income or expense fact
///
/// Records are created once by command parsing or extraction and never
/// mutated afterwards. Category labels are kept verbatim: `"Makanan"` and
/// `"makanan"` are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Calendar day the transaction belongs to
    pub date: NaiveDate,
    /// Expense or income
    pub kind: TransactionKind,
    /// Non-negative amount
    pub amount: Amount,
    /// Short category label
    pub category: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Where the record came from
    #[serde(default)]
    pub source: RecordSource,
}

impl LedgerRecord {
    /// Create a record from an explicit command
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            source: RecordSource::Command,
        }
    }

    /// Create an expense record
    pub fn expense(
        date: NaiveDate,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(date, TransactionKind::Expense, amount, category, description)
    }

    /// Create an income record
    pub fn income(
        date: NaiveDate,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(date, TransactionKind::Income, amount, category, description)
    }

    /// Tag the record with its source
    #[must_use]
    pub const fn with_source(mut self, source: RecordSource) -> Self {
        self.source = source;
        self
    }

    /// Check if this is an expense
    #[must_use]
    pub const fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }

    /// Check if this is an income
    #[must_use]
    pub const fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }
}
