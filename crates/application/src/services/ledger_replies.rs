//! Ledger replies - Fixed texts and confirmation messages sent back to users

use domain::LedgerRecord;

use super::SummaryService;
use crate::date_parser;

/// Greeting for `/start`
pub const START_MESSAGE: &str = "🤖 Selamat datang di Bot Pelacak Pengeluaran!

Saya dapat membantu Anda melacak pengeluaran dan pemasukan dengan berbagai cara:

📸 *Kirim foto struk* - Saya akan membaca dan mencatat pengeluaran
🎤 *Kirim voice note* - Ceritakan pengeluaran Anda
💬 *Gunakan perintah teks*:
   • /pengeluaran [jumlah] [kategori] [keterangan]
   • /pemasukan [jumlah] [kategori] [keterangan]

📊 *Lihat rekap*:
   • /rekapharian [tanggal] - Rekap hari tertentu
   • /rekapcustom [rentang tanggal] - Rekap periode custom
   • /rekapbulanan [bulan tahun] - Rekap bulanan
   • /rekaptahunan [tahun] - Rekap tahunan

Ketik /help untuk panduan lengkap.";

/// Usage guide for `/help`
pub const HELP_MESSAGE: &str = "📖 *Panduan Penggunaan Bot Pelacak Pengeluaran*

*🔸 Cara Mencatat Pengeluaran:*

1️⃣ *Foto Struk*
   Kirim foto struk/nota pembelian, bot akan otomatis membaca dan mencatat

2️⃣ *Voice Note*
   Rekam suara: \"Beli makan siang 25 ribu di warteg\"

3️⃣ *Perintah Teks*
   `/pengeluaran 25000 makanan Makan siang di warteg`
   `/pemasukan 500000 gaji Gaji bulan ini`

*🔸 Cara Melihat Rekap:*

📅 `/rekapharian 12 Agustus 2025` - Rekap tanggal tertentu
📊 `/rekapcustom 12-15 Agustus 2025` - Rekap rentang tanggal
📊 `/rekapcustom 29 Juli 2025 - 2 Agustus 2025` - Rekap lintas bulan
📈 `/rekapbulanan Agustus 2025` - Rekap bulan
📊 `/rekaptahunan 2025` - Rekap tahun

*🔸 Format Tanggal yang Didukung:*
• 12 Agustus 2025
• 12-15 Agustus 2025
• 29 Juli 2025 - 2 Agustus 2025
• Agustus 2025
• 2025

Semua data akan tersimpan otomatis! 📊";

/// Free text that does not describe a transaction
pub const NOT_UNDERSTOOD: &str =
    "❓ Saya tidak mengerti pesan Anda. Gunakan /help untuk melihat panduan penggunaan.";

/// Receipt photo without a readable amount
pub const UNREADABLE_PHOTO: &str = "❌ Tidak dapat membaca informasi pengeluaran dari foto. \
                                    Pastikan foto struk jelas dan terbaca.";

/// Voice note that could not be transcribed
pub const UNREADABLE_VOICE: &str = "❌ Tidak dapat memproses voice note. Silakan coba lagi.";

/// Generic failure while recording
pub const GENERIC_FAILURE: &str = "❌ Terjadi kesalahan. Silakan coba lagi.";

/// Failure while building a summary
pub const SUMMARY_FAILURE: &str =
    "❌ Terjadi kesalahan saat mengambil rekap. Silakan coba lagi.";

/// Failure while handling a photo
pub const PHOTO_FAILURE: &str = "❌ Terjadi kesalahan saat memproses foto. Silakan coba lagi.";

/// Failure while handling a voice note
pub const VOICE_FAILURE: &str =
    "❌ Terjadi kesalahan saat memproses voice note. Silakan coba lagi.";

/// Transcript that does not describe a transaction
pub fn voice_not_understood(transcript: &str) -> String {
    format!(
        "❌ Tidak dapat memahami informasi pengeluaran/pemasukan dari: \"{transcript}\"\n\n\
         Coba ucapkan dengan format: \"Beli makan siang 25 ribu\" atau \"Dapat gaji 5 juta\""
    )
}

/// Confirmation for a stored record
///
/// Voice notes echo the transcript between the heading and the details.
pub fn confirmation(
    summaries: &SummaryService,
    record: &LedgerRecord,
    transcript: Option<&str>,
) -> String {
    let mut message = format!(
        "✅ *{}{} tercatat!*\n\n",
        record.kind.display_name(),
        record.source.confirmation_suffix()
    );
    if let Some(transcript) = transcript {
        message.push_str(&format!("🎤 Yang Anda katakan: \"{transcript}\"\n\n"));
    }
    message.push_str(&format!(
        "💰 Jumlah: {}\n🏷️ Kategori: {}\n📝 Keterangan: {}\n📅 Tanggal: {}",
        summaries.format_amount(record.amount.value()),
        record.category,
        record.description,
        date_parser::format_date(record.date)
    ));
    message
}
