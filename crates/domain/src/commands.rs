//! Ledger commands - Strongly typed representations of user intents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Amount, DateInterval, TransactionKind};

/// Everything a user can ask the ledger assistant to do
///
/// Commands are parsed from messenger text (`/pengeluaran 25000 makanan ...`)
/// or produced for plain chat text that still needs extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerCommand {
    /// Greeting with a short feature overview
    Start,

    /// Usage guide
    Help,

    /// Record an expense or income explicitly
    Record {
        /// Expense or income
        kind: TransactionKind,
        /// Amount in the ledger currency
        amount: Amount,
        /// Category label, kept verbatim
        category: String,
        /// Optional free-text description (may be empty)
        description: String,
    },

    /// Summary for a single day
    DailySummary {
        /// Day to summarise (defaults to today)
        date: Option<NaiveDate>,
    },

    /// Summary for an explicit date range
    CustomSummary {
        /// Inclusive range to summarise
        interval: DateInterval,
    },

    /// Summary for a calendar month
    MonthlySummary {
        /// Any day in the month to summarise (defaults to the current month)
        month: Option<NaiveDate>,
    },

    /// Summary for a calendar year
    YearlySummary {
        /// Year to summarise (defaults to the current year)
        year: Option<i32>,
    },

    /// Plain chat text that may describe a transaction
    FreeText {
        /// The original message
        text: String,
    },
}

impl LedgerCommand {
    /// Check if this command writes to the ledger
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Record { .. } | Self::FreeText { .. })
    }

    /// Check if this command produces a summary
    pub const fn is_summary(&self) -> bool {
        matches!(
            self,
            Self::DailySummary { .. }
                | Self::CustomSummary { .. }
                | Self::MonthlySummary { .. }
                | Self::YearlySummary { .. }
        )
    }

    /// Short description for logs
    pub fn description(&self) -> String {
        match self {
            Self::Start => "Start".to_string(),
            Self::Help => "Help".to_string(),
            Self::Record {
                kind,
                amount,
                category,
                ..
            } => format!("Record {} {amount} ({category})", kind.label()),
            Self::DailySummary { date } => match date {
                Some(d) => format!("Daily summary for {d}"),
                None => "Daily summary for today".to_string(),
            },
            Self::CustomSummary { interval } => format!("Custom summary for {interval}"),
            Self::MonthlySummary { month } => match month {
                Some(d) => format!("Monthly summary for {}", d.format("%Y-%m")),
                None => "Monthly summary for this month".to_string(),
            },
            Self::YearlySummary { year } => match year {
                Some(y) => format!("Yearly summary for {y}"),
                None => "Yearly summary for this year".to_string(),
            },
            Self::FreeText { text } => {
                let preview: String = text.chars().take(50).collect();
                format!("Free text: {preview}")
            },
        }
    }
}
