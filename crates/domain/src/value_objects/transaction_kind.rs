//! Transaction kind - Direction of money flow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a ledger entry takes money out or brings it in
///
/// Serialized with the Indonesian labels used by the ledger sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransactionKind {
    /// Money spent (pengeluaran)
    #[default]
    #[serde(rename = "pengeluaran")]
    Expense,
    /// Money received (pemasukan)
    #[serde(rename = "pemasukan")]
    Income,
}

impl TransactionKind {
    /// Storage label, as written to the ledger
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expense => "pengeluaran",
            Self::Income => "pemasukan",
        }
    }

    /// Capitalised label for user-facing messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Expense => "Pengeluaran",
            Self::Income => "Pemasukan",
        }
    }

    /// Parse from a storage label (case-insensitive)
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pengeluaran" => Some(Self::Expense),
            "pemasukan" => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
