//! Value Objects - Immutable, identity-less domain primitives

mod amount;
mod audio_format;
mod date_interval;
mod transaction_kind;

pub use amount::Amount;
pub use audio_format::AudioFormat;
pub use date_interval::DateInterval;
pub use transaction_kind::TransactionKind;
