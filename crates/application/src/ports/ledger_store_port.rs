//! Ledger store port - Interface for persisting and querying records

use async_trait::async_trait;
use domain::{DateInterval, LedgerRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the append-only ledger
///
/// Implementations keep records in insertion order. Spreadsheet-backed or
/// database-backed stores both fit behind this interface.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerStorePort: Send + Sync {
    /// Append a record to the ledger
    async fn append(&self, record: &LedgerRecord) -> Result<(), ApplicationError>;

    /// All records whose date lies within `interval` (both ends inclusive)
    ///
    /// Records are returned in insertion order.
    async fn records_in(
        &self,
        interval: &DateInterval,
    ) -> Result<Vec<LedgerRecord>, ApplicationError>;
}
