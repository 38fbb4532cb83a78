//! Typed reasons a slash command could not be parsed

use domain::TransactionKind;
use thiserror::Error;

const CUSTOM_RANGE_EXAMPLES: &str = "Contoh yang benar:\n\
    • `/rekapcustom 12-15 Agustus 2025`\n\
    • `/rekapcustom 29 Juli 2025 - 2 Agustus 2025`";

/// Why a slash command was rejected
///
/// The `Display` text is meant for logs; [`CommandRejection::user_message`]
/// is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandRejection {
    /// `/pengeluaran` or `/pemasukan` without amount and category
    #[error("{} needs an amount and a category", .0.label())]
    MissingRecordArguments(TransactionKind),

    /// Amount is not a non-negative number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// `/rekapharian` argument is not a date
    #[error("invalid date")]
    InvalidDate,

    /// `/rekapcustom` without a range
    #[error("missing date range")]
    MissingRange,

    /// `/rekapcustom` argument is not a range
    #[error("invalid date range")]
    InvalidRange,

    /// `/rekapbulanan` argument is not a month and year
    #[error("invalid month")]
    InvalidMonth,

    /// `/rekaptahunan` argument is not a year
    #[error("invalid year")]
    InvalidYear,

    /// Slash command nobody handles
    #[error("unknown command: /{0}")]
    UnknownCommand(String),
}

impl CommandRejection {
    /// Corrective reply for the user, with a usage example
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRecordArguments(TransactionKind::Expense) => "❌ Format salah!\n\n\
                 Gunakan: `/pengeluaran [jumlah] [kategori] [keterangan]`\n\
                 Contoh: `/pengeluaran 25000 makanan Makan siang di warteg`"
                .to_string(),
            Self::MissingRecordArguments(TransactionKind::Income) => "❌ Format salah!\n\n\
                 Gunakan: `/pemasukan [jumlah] [kategori] [keterangan]`\n\
                 Contoh: `/pemasukan 500000 gaji Gaji bulan ini`"
                .to_string(),
            Self::InvalidAmount(_) => "❌ Jumlah harus berupa angka yang valid.".to_string(),
            Self::InvalidDate => "❌ Format tanggal salah!\n\n\
                 Contoh yang benar: `/rekapharian 12 Agustus 2025`"
                .to_string(),
            Self::MissingRange => format!("❌ Format salah!\n\n{CUSTOM_RANGE_EXAMPLES}"),
            Self::InvalidRange => {
                format!("❌ Format rentang tanggal salah!\n\n{CUSTOM_RANGE_EXAMPLES}")
            },
            Self::InvalidMonth => "❌ Format bulan salah!\n\n\
                 Contoh yang benar: `/rekapbulanan Agustus 2025`"
                .to_string(),
            Self::InvalidYear => "❌ Format tahun salah!\n\n\
                 Contoh yang benar: `/rekaptahunan 2025`"
                .to_string(),
            Self::UnknownCommand(name) => format!(
                "❓ Perintah /{name} tidak dikenal. Gunakan /help untuk melihat panduan penggunaan."
            ),
        }
    }
}
