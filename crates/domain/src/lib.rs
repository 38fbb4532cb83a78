//! Domain layer for Kasbot
//!
//! Contains the ledger vocabulary: records, value objects, user intents and
//! domain errors. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::LedgerCommand;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
