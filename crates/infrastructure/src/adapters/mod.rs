//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_ledger_store;
mod json_file_ledger_store;
mod unavailable_extraction;

pub use in_memory_ledger_store::InMemoryLedgerStore;
pub use json_file_ledger_store::JsonFileLedgerStore;
pub use unavailable_extraction::UnavailableExtractionAdapter;
