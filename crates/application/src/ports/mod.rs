//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod extraction_port;
mod ledger_store_port;
mod speech_port;

#[cfg(test)]
pub use extraction_port::MockExtractionPort;
pub use extraction_port::{ExtractedTransaction, ExtractionPort};
#[cfg(test)]
pub use ledger_store_port::MockLedgerStorePort;
pub use ledger_store_port::LedgerStorePort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
pub use speech_port::SpeechPort;
