//! In-memory ledger store

use async_trait::async_trait;
use domain::{DateInterval, LedgerRecord};
use parking_lot::RwLock;
use tracing::debug;

use application::{ApplicationError, ports::LedgerStorePort};

/// Ledger kept in process memory
///
/// Records are held in insertion order behind a `RwLock`; queries clone the
/// matching records so no lock is held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    records: RwLock<Vec<LedgerRecord>>,
}

impl InMemoryLedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: Vec<LedgerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Copy of every record in insertion order
    pub fn snapshot(&self) -> Vec<LedgerRecord> {
        self.records.read().clone()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl LedgerStorePort for InMemoryLedgerStore {
    async fn append(&self, record: &LedgerRecord) -> Result<(), ApplicationError> {
        self.records.write().push(record.clone());
        Ok(())
    }

    async fn records_in(
        &self,
        interval: &DateInterval,
    ) -> Result<Vec<LedgerRecord>, ApplicationError> {
        let records: Vec<LedgerRecord> = self
            .records
            .read()
            .iter()
            .filter(|r| interval.contains(r.date))
            .cloned()
            .collect();
        debug!(%interval, matched = records.len(), "Queried in-memory ledger");
        Ok(records)
    }
}
