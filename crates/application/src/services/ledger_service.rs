//! Ledger service - Turns one incoming message into one reply
//!
//! Text goes through the [`CommandParser`]; explicit commands write to the
//! ledger or render summaries, free text, photos and voice notes go through
//! extraction first. Every failure ends up as an Indonesian reply, never as
//! an error for the messenger layer to handle.

use std::{fmt, sync::Arc};

use chrono::{Datelike, NaiveDate};
use domain::{
    AudioFormat, DEFAULT_CATEGORY, DateInterval, LedgerCommand, LedgerRecord, RecordSource,
    TransactionKind,
};
use tracing::{debug, info, instrument, warn};

use super::{SummaryService, ledger_replies, summary_service::summarize};
use crate::{
    command_parser::CommandParser,
    date_parser,
    error::ApplicationError,
    ports::{ExtractedTransaction, ExtractionPort, LedgerStorePort, SpeechPort},
};

/// Service answering ledger messages
pub struct LedgerService {
    store: Arc<dyn LedgerStorePort>,
    extraction: Arc<dyn ExtractionPort>,
    speech: Option<Arc<dyn SpeechPort>>,
    parser: CommandParser,
    summaries: SummaryService,
    default_category: String,
}

impl fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerService")
            .field("has_speech", &self.speech.is_some())
            .field("summaries", &self.summaries)
            .field("default_category", &self.default_category)
            .finish_non_exhaustive()
    }
}

impl LedgerService {
    /// Create a new ledger service
    pub fn new(
        store: Arc<dyn LedgerStorePort>,
        extraction: Arc<dyn ExtractionPort>,
        summaries: SummaryService,
    ) -> Self {
        Self {
            store,
            extraction,
            speech: None,
            parser: CommandParser::new(),
            summaries,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Enable voice notes
    #[must_use]
    pub fn with_speech(mut self, speech: Arc<dyn SpeechPort>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Category used when extraction finds none
    #[must_use]
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// The summary renderer in use
    pub const fn summaries(&self) -> &SummaryService {
        &self.summaries
    }

    /// Answer a text message
    ///
    /// `today` fills in missing dates for records and summaries.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn handle_text(&self, text: &str, today: NaiveDate) -> String {
        let command = match self.parser.parse(text) {
            Ok(command) => command,
            Err(rejection) => return rejection.user_message(),
        };
        self.execute(command, today).await
    }

    /// Run an already parsed command
    #[instrument(skip(self, command), fields(command = %command.description()))]
    pub async fn execute(&self, command: LedgerCommand, today: NaiveDate) -> String {
        match command {
            LedgerCommand::Start => ledger_replies::START_MESSAGE.to_string(),
            LedgerCommand::Help => ledger_replies::HELP_MESSAGE.to_string(),
            LedgerCommand::Record {
                kind,
                amount,
                category,
                description,
            } => {
                let record = LedgerRecord::new(today, kind, amount, category, description);
                match self.store_record(&record).await {
                    Ok(()) => ledger_replies::confirmation(&self.summaries, &record, None),
                    Err(e) => {
                        warn!(error = %e, "Failed to record command");
                        ledger_replies::GENERIC_FAILURE.to_string()
                    },
                }
            },
            LedgerCommand::FreeText { text } => self.record_free_text(&text, today).await,
            summary => match self.summary_reply(&summary, today).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(error = %e, "Failed to build summary");
                    ledger_replies::SUMMARY_FAILURE.to_string()
                },
            },
        }
    }

    /// Answer a receipt photo
    ///
    /// Receipts are always recorded as expenses.
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn handle_photo(&self, image: Vec<u8>, today: NaiveDate) -> String {
        let extracted = match self.extraction.extract_from_image(image).await {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(error = %e, "Receipt extraction failed");
                return ledger_replies::PHOTO_FAILURE.to_string();
            },
        };

        let Some(mut extracted) = extracted.filter(ExtractedTransaction::is_usable) else {
            debug!("No expense found on receipt");
            return ledger_replies::UNREADABLE_PHOTO.to_string();
        };
        extracted.kind = TransactionKind::Expense;

        let record = extracted.into_record(today, &self.default_category, RecordSource::Photo);
        match self.store_record(&record).await {
            Ok(()) => ledger_replies::confirmation(&self.summaries, &record, None),
            Err(e) => {
                warn!(error = %e, "Failed to record receipt");
                ledger_replies::PHOTO_FAILURE.to_string()
            },
        }
    }

    /// Answer a voice note
    #[instrument(skip(self, audio), fields(audio_len = audio.len(), format = %format))]
    pub async fn handle_voice(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
        today: NaiveDate,
    ) -> String {
        let Some(speech) = &self.speech else {
            warn!("Voice note received but no speech backend is configured");
            return ledger_replies::UNREADABLE_VOICE.to_string();
        };

        let transcript = match speech.transcribe(audio, format).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return ledger_replies::UNREADABLE_VOICE.to_string(),
            Err(e) => {
                warn!(error = %e, "Transcription failed");
                return ledger_replies::VOICE_FAILURE.to_string();
            },
        };
        debug!(transcript_len = transcript.len(), "Voice note transcribed");

        let extracted = match self.extraction.extract_from_text(&transcript).await {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(error = %e, "Extraction from transcript failed");
                return ledger_replies::VOICE_FAILURE.to_string();
            },
        };

        let Some(extracted) = extracted.filter(ExtractedTransaction::is_usable) else {
            return ledger_replies::voice_not_understood(&transcript);
        };

        let record = extracted.into_record(today, &self.default_category, RecordSource::Voice);
        match self.store_record(&record).await {
            Ok(()) => ledger_replies::confirmation(&self.summaries, &record, Some(&transcript)),
            Err(e) => {
                warn!(error = %e, "Failed to record voice note");
                ledger_replies::VOICE_FAILURE.to_string()
            },
        }
    }

    /// Period and title for a summary command
    ///
    /// Returns `Ok(None)` for commands that are not summaries.
    pub fn summary_period(
        command: &LedgerCommand,
        today: NaiveDate,
    ) -> Result<Option<(DateInterval, String)>, ApplicationError> {
        let period = match command {
            LedgerCommand::DailySummary { date } => {
                let date = date.unwrap_or(today);
                (
                    DateInterval::single_day(date),
                    format!("Rekap Harian - {}", date_parser::format_date(date)),
                )
            },
            LedgerCommand::CustomSummary { interval } => (
                *interval,
                format!("Rekap Custom - {}", date_parser::format_interval(interval)),
            ),
            LedgerCommand::MonthlySummary { month } => {
                let month = month.unwrap_or(today);
                (
                    DateInterval::month_of(month)?,
                    format!("Rekap Bulanan - {}", date_parser::format_month_year(month)),
                )
            },
            LedgerCommand::YearlySummary { year } => {
                let year = year.unwrap_or_else(|| today.year());
                (DateInterval::year(year)?, format!("Rekap Tahunan - {year}"))
            },
            _ => return Ok(None),
        };
        Ok(Some(period))
    }

    async fn summary_reply(
        &self,
        command: &LedgerCommand,
        today: NaiveDate,
    ) -> Result<String, ApplicationError> {
        let Some((interval, title)) = Self::summary_period(command, today)? else {
            return Err(ApplicationError::Internal(format!(
                "not a summary command: {}",
                command.description()
            )));
        };

        let records = self.store.records_in(&interval).await?;
        debug!(%interval, records = records.len(), "Loaded records for summary");

        Ok(self.summaries.render_summary(&summarize(&records), &title)?)
    }

    async fn record_free_text(&self, text: &str, today: NaiveDate) -> String {
        if text.is_empty() {
            return ledger_replies::NOT_UNDERSTOOD.to_string();
        }

        let extracted = match self.extraction.extract_from_text(text).await {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(error = %e, "Extraction from text failed");
                return ledger_replies::GENERIC_FAILURE.to_string();
            },
        };

        let Some(extracted) = extracted.filter(ExtractedTransaction::is_usable) else {
            debug!("Free text does not describe a transaction");
            return ledger_replies::NOT_UNDERSTOOD.to_string();
        };

        let record = extracted.into_record(today, &self.default_category, RecordSource::Text);
        match self.store_record(&record).await {
            Ok(()) => ledger_replies::confirmation(&self.summaries, &record, None),
            Err(e) => {
                warn!(error = %e, "Failed to record free text");
                ledger_replies::GENERIC_FAILURE.to_string()
            },
        }
    }

    async fn store_record(&self, record: &LedgerRecord) -> Result<(), ApplicationError> {
        self.store.append(record).await?;
        info!(
            kind = %record.kind.label(),
            amount = %record.amount,
            category = %record.category,
            source = ?record.source,
            "Recorded transaction"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::Amount;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{MockExtractionPort, MockLedgerStorePort, MockSpeechPort};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 12).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(store: MockLedgerStorePort, extraction: MockExtractionPort) -> LedgerService {
        LedgerService::new(
            Arc::new(store),
            Arc::new(extraction),
            SummaryService::default(),
        )
    }

    fn extracted(kind: TransactionKind, amount: u32, category: &str) -> ExtractedTransaction {
        ExtractedTransaction {
            kind,
            amount: Amount::from(amount),
            category: category.to_string(),
            description: "Kopi susu".to_string(),
            date: None,
        }
    }

    #[tokio::test]
    async fn start_and_help_do_not_touch_ports() {
        let service = service(MockLedgerStorePort::new(), MockExtractionPort::new());
        assert_eq!(
            service.handle_text("/start", today()).await,
            ledger_replies::START_MESSAGE
        );
        assert_eq!(
            service.handle_text("/help", today()).await,
            ledger_replies::HELP_MESSAGE
        );
    }

    #[tokio::test]
    async fn expense_command_is_stored_and_confirmed() {
        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .withf(|record| {
                record.is_expense()
                    && record.amount == Amount::from(25_000)
                    && record.category == "makanan"
                    && record.date == NaiveDate::from_ymd_opt(2025, 8, 12).unwrap()
                    && record.source == RecordSource::Command
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = service(store, MockExtractionPort::new());
        let reply = service
            .handle_text("/pengeluaran 25000 makanan Makan siang", today())
            .await;
        assert!(reply.starts_with("✅ *Pengeluaran tercatat!*"));
        assert!(reply.contains("💰 Jumlah: Rp 25.000"));
        assert!(reply.ends_with("📅 Tanggal: 12 Agustus 2025"));
    }

    #[tokio::test]
    async fn rejected_command_explains_usage() {
        let service = service(MockLedgerStorePort::new(), MockExtractionPort::new());
        let reply = service.handle_text("/pengeluaran abc makanan", today()).await;
        assert_eq!(reply, "❌ Jumlah harus berupa angka yang valid.");
    }

    #[tokio::test]
    async fn store_failure_becomes_generic_reply() {
        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .returning(|_| Err(ApplicationError::Storage("sheet unavailable".into())));

        let service = service(store, MockExtractionPort::new());
        let reply = service.handle_text("/pemasukan 500000 gaji", today()).await;
        assert_eq!(reply, ledger_replies::GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn daily_summary_defaults_to_today() {
        let mut store = MockLedgerStorePort::new();
        store
            .expect_records_in()
            .with(eq(DateInterval::single_day(today())))
            .returning(|_| Ok(vec![]));

        let service = service(store, MockExtractionPort::new());
        let reply = service.handle_text("/rekapharian", today()).await;
        assert_eq!(
            reply,
            "📊 *Rekap Harian - 12 Agustus 2025*\n\n❌ Tidak ada data untuk periode ini."
        );
    }

    #[tokio::test]
    async fn custom_summary_renders_records() {
        let interval = DateInterval::new(ymd(2025, 7, 29), ymd(2025, 8, 2)).unwrap();
        let records = vec![
            LedgerRecord::expense(ymd(2025, 7, 30), Amount::from(25_000), "makanan", ""),
            LedgerRecord::income(ymd(2025, 8, 1), Amount::from(500_000), "gaji", ""),
        ];

        let mut store = MockLedgerStorePort::new();
        store
            .expect_records_in()
            .with(eq(interval))
            .returning(move |_| Ok(records.clone()));

        let service = service(store, MockExtractionPort::new());
        let reply = service
            .handle_text("/rekapcustom 29 Juli 2025 - 2 Agustus 2025", today())
            .await;
        assert!(reply.starts_with("📊 *Rekap Custom - 29 Juli 2025 - 2 Agustus 2025*\n\n"));
        assert!(reply.ends_with("📈 *Saldo Bersih: +Rp 475.000*"));
    }

    #[tokio::test]
    async fn monthly_and_yearly_summaries_cover_whole_periods() {
        let mut store = MockLedgerStorePort::new();
        store
            .expect_records_in()
            .with(eq(DateInterval::new(ymd(2024, 2, 1), ymd(2024, 2, 29)).unwrap()))
            .times(1)
            .returning(|_| Ok(vec![]));
        store
            .expect_records_in()
            .with(eq(DateInterval::year(2025).unwrap()))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = service(store, MockExtractionPort::new());
        let monthly = service.handle_text("/rekapbulanan Februari 2024", today()).await;
        assert!(monthly.starts_with("📊 *Rekap Bulanan - Februari 2024*"));
        let yearly = service.handle_text("/rekaptahunan", today()).await;
        assert!(yearly.starts_with("📊 *Rekap Tahunan - 2025*"));
    }

    #[tokio::test]
    async fn summary_store_failure_is_reported() {
        let mut store = MockLedgerStorePort::new();
        store
            .expect_records_in()
            .returning(|_| Err(ApplicationError::Storage("timeout".into())));

        let service = service(store, MockExtractionPort::new());
        let reply = service.handle_text("/rekaptahunan 2025", today()).await;
        assert_eq!(reply, ledger_replies::SUMMARY_FAILURE);
    }

    #[tokio::test]
    async fn overflowing_totals_are_reported_not_panicked() {
        let huge = Amount::new(rust_decimal::Decimal::MAX).unwrap();
        let records = vec![
            LedgerRecord::expense(ymd(2025, 3, 1), huge, "a", ""),
            LedgerRecord::expense(ymd(2025, 4, 1), huge, "a", ""),
        ];
        let mut store = MockLedgerStorePort::new();
        store
            .expect_records_in()
            .returning(move |_| Ok(records.clone()));

        let service = service(store, MockExtractionPort::new());
        let reply = service.handle_text("/rekaptahunan 2025", today()).await;
        assert_eq!(reply, ledger_replies::SUMMARY_FAILURE);
    }

    #[tokio::test]
    async fn free_text_is_extracted_and_stored() {
        let mut extraction = MockExtractionPort::new();
        extraction
            .expect_extract_from_text()
            .withf(|text| text == "beli kopi 20 ribu")
            .returning(|_| Ok(Some(extracted(TransactionKind::Expense, 20_000, ""))));

        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .withf(|record| record.category == "lainnya" && record.source == RecordSource::Text)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(store, extraction);
        let reply = service.handle_text("beli kopi 20 ribu", today()).await;
        assert!(reply.starts_with("✅ *Pengeluaran tercatat!*"));
        assert!(reply.contains("🏷️ Kategori: lainnya"));
    }

    #[tokio::test]
    async fn zero_amount_extraction_is_not_understood() {
        let mut extraction = MockExtractionPort::new();
        extraction
            .expect_extract_from_text()
            .returning(|_| Ok(Some(extracted(TransactionKind::Expense, 0, "makanan"))));

        let service = service(MockLedgerStorePort::new(), extraction);
        let reply = service.handle_text("halo apa kabar", today()).await;
        assert_eq!(reply, ledger_replies::NOT_UNDERSTOOD);
    }

    #[tokio::test]
    async fn custom_default_category_is_used() {
        let mut extraction = MockExtractionPort::new();
        extraction
            .expect_extract_from_text()
            .returning(|_| Ok(Some(extracted(TransactionKind::Income, 100_000, " "))));

        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .withf(|record| record.category == "umum" && record.is_income())
            .returning(|_| Ok(()));

        let service = service(store, extraction).with_default_category("umum");
        let reply = service.handle_text("dapat transfer 100 ribu", today()).await;
        assert!(reply.starts_with("✅ *Pemasukan tercatat!*"));
    }

    #[tokio::test]
    async fn photo_is_always_an_expense() {
        let mut extraction = MockExtractionPort::new();
        extraction
            .expect_extract_from_image()
            .returning(|_| Ok(Some(extracted(TransactionKind::Income, 75_000, "belanja"))));

        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .withf(|record| record.is_expense() && record.source == RecordSource::Photo)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(store, extraction);
        let reply = service.handle_photo(vec![0xFF, 0xD8], today()).await;
        assert!(reply.starts_with("✅ *Pengeluaran dari foto tercatat!*"));
    }

    #[tokio::test]
    async fn unreadable_photo_is_reported() {
        let mut extraction = MockExtractionPort::new();
        extraction.expect_extract_from_image().returning(|_| Ok(None));

        let service = service(MockLedgerStorePort::new(), extraction);
        let reply = service.handle_photo(vec![1], today()).await;
        assert_eq!(reply, ledger_replies::UNREADABLE_PHOTO);
    }

    #[tokio::test]
    async fn voice_without_backend_is_unreadable() {
        let service = service(MockLedgerStorePort::new(), MockExtractionPort::new());
        let reply = service.handle_voice(vec![1], AudioFormat::Ogg, today()).await;
        assert_eq!(reply, ledger_replies::UNREADABLE_VOICE);
    }

    #[tokio::test]
    async fn voice_note_is_transcribed_extracted_and_stored() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .returning(|_, _| Ok(Some("dapat gaji 5 juta".to_string())));

        let mut extraction = MockExtractionPort::new();
        extraction
            .expect_extract_from_text()
            .withf(|text| text == "dapat gaji 5 juta")
            .returning(|_| Ok(Some(extracted(TransactionKind::Income, 5_000_000, "gaji"))));

        let mut store = MockLedgerStorePort::new();
        store
            .expect_append()
            .withf(|record| record.source == RecordSource::Voice)
            .returning(|_| Ok(()));

        let service = service(store, extraction).with_speech(Arc::new(speech));
        let reply = service.handle_voice(vec![1, 2], AudioFormat::Ogg, today()).await;
        assert!(reply.starts_with(
            "✅ *Pemasukan dari voice note tercatat!*\n\n🎤 Yang Anda katakan: \"dapat gaji 5 juta\""
        ));
        assert!(reply.contains("💰 Jumlah: Rp 5.000.000"));
    }

    #[tokio::test]
    async fn voice_without_transaction_quotes_transcript() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .returning(|_, _| Ok(Some("selamat pagi".to_string())));

        let mut extraction = MockExtractionPort::new();
        extraction.expect_extract_from_text().returning(|_| Ok(None));

        let service = service(MockLedgerStorePort::new(), extraction).with_speech(Arc::new(speech));
        let reply = service.handle_voice(vec![1], AudioFormat::Opus, today()).await;
        assert_eq!(reply, ledger_replies::voice_not_understood("selamat pagi"));
    }

    #[tokio::test]
    async fn transcription_error_is_reported() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .returning(|_, _| Err(ApplicationError::ExternalService("whisper down".into())));

        let service = service(MockLedgerStorePort::new(), MockExtractionPort::new())
            .with_speech(Arc::new(speech));
        let reply = service.handle_voice(vec![1], AudioFormat::Ogg, today()).await;
        assert_eq!(reply, ledger_replies::VOICE_FAILURE);
    }

    #[test]
    fn summary_period_ignores_non_summaries() {
        let period = LedgerService::summary_period(&LedgerCommand::Help, today()).unwrap();
        assert!(period.is_none());
    }

    #[test]
    fn debug_output_is_non_exhaustive() {
        let service = service(MockLedgerStorePort::new(), MockExtractionPort::new());
        let debug = format!("{service:?}");
        assert!(debug.contains("LedgerService"));
        assert!(debug.contains("has_speech"));
    }
}
