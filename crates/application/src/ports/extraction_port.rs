//! Extraction port - Interface for turning free text or receipt photos into
//! transaction candidates

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{Amount, LedgerRecord, RecordSource, TransactionKind};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A transaction candidate read from unstructured input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTransaction {
    /// Expense or income
    #[serde(default)]
    pub kind: TransactionKind,
    /// Amount; zero means the backend found nothing usable
    pub amount: Amount,
    /// Category label, empty if none was recognised
    #[serde(default)]
    pub category: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Date printed on a receipt, if any
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ExtractedTransaction {
    /// Check if the candidate carries a usable amount
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Turn the candidate into a ledger record
    ///
    /// `today` is used when no date was extracted and `default_category`
    /// when the category is blank.
    #[must_use]
    pub fn into_record(
        self,
        today: NaiveDate,
        default_category: &str,
        source: RecordSource,
    ) -> LedgerRecord {
        let category = if self.category.trim().is_empty() {
            default_category.to_string()
        } else {
            self.category
        };
        LedgerRecord::new(
            self.date.unwrap_or(today),
            self.kind,
            self.amount,
            category,
            self.description,
        )
        .with_source(source)
    }
}

/// Port for transaction extraction backends
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExtractionPort: Send + Sync {
    /// Read a transaction from a chat message
    ///
    /// Returns `Ok(None)` if the text does not describe a transaction.
    async fn extract_from_text(
        &self,
        text: &str,
    ) -> Result<Option<ExtractedTransaction>, ApplicationError>;

    /// Read an expense from a receipt photo
    ///
    /// Returns `Ok(None)` if the image is unreadable.
    async fn extract_from_image(
        &self,
        image: Vec<u8>,
    ) -> Result<Option<ExtractedTransaction>, ApplicationError>;
}
