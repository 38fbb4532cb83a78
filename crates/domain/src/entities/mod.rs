//! Domain entities - Facts recorded in the ledger

mod ledger_record;

pub use ledger_record::{DEFAULT_CATEGORY, LedgerRecord, RecordSource};
