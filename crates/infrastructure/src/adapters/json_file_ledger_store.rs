//! JSON file ledger store
//!
//! Persists the whole ledger as a JSON array, rewritten after every append.
//! Suitable for a single-user bot; the file is the spreadsheet.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::{DateInterval, LedgerRecord};
use tokio::sync::Mutex;
use tracing::{debug, info};

use application::{ApplicationError, ports::LedgerStorePort};

use super::InMemoryLedgerStore;

/// Ledger stored in a JSON file
#[derive(Debug)]
pub struct JsonFileLedgerStore {
    path: PathBuf,
    records: InMemoryLedgerStore,
    write_lock: Mutex<()>,
}

impl JsonFileLedgerStore {
    /// Open a ledger file, starting empty if it does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<LedgerRecord>>(&bytes).map_err(|e| {
                ApplicationError::Storage(format!("{}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Ledger file not found, starting empty");
                Vec::new()
            },
            Err(e) => {
                return Err(ApplicationError::Storage(format!(
                    "{}: {e}",
                    path.display()
                )));
            },
        };

        info!(path = %path.display(), records = records.len(), "Opened ledger file");
        Ok(Self {
            path,
            records: InMemoryLedgerStore::with_records(records),
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    async fn write_file(&self, records: &[LedgerRecord]) -> Result<(), ApplicationError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ApplicationError::Storage(format!("{}: {e}", self.path.display())))
    }
}

#[async_trait]
impl LedgerStorePort for JsonFileLedgerStore {
    async fn append(&self, record: &LedgerRecord) -> Result<(), ApplicationError> {
        let _guard = self.write_lock.lock().await;
        // Memory only follows a successful write.
        let mut records = self.records.snapshot();
        records.push(record.clone());
        self.write_file(&records).await?;
        self.records.append(record).await
    }

    async fn records_in(
        &self,
        interval: &DateInterval,
    ) -> Result<Vec<LedgerRecord>, ApplicationError> {
        self.records.records_in(interval).await
    }
}
