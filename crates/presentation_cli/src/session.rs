//! Interactive chat session against a local ledger

use std::sync::Arc;

use application::{LedgerService, SummaryService, ports::LedgerStorePort};
use chrono::NaiveDate;
use infrastructure::{AppConfig, UnavailableExtractionAdapter};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Lines that end the session
const EXIT_WORDS: [&str; 2] = ["/exit", "/quit"];

/// Build a ledger service for the CLI
///
/// No extraction backend is wired up, so only slash commands record data.
pub fn build_service(config: &AppConfig, store: Arc<dyn LedgerStorePort>) -> LedgerService {
    LedgerService::new(
        store,
        Arc::new(UnavailableExtractionAdapter::new()),
        SummaryService::new(config.ledger.currency_format()),
    )
    .with_default_category(config.ledger.default_category.clone())
}

/// Answer each input line until EOF or an exit word
///
/// Returns the number of messages handled.
pub async fn run<R, W>(
    service: &LedgerService,
    today: NaiveDate,
    input: R,
    mut output: W,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&message.to_lowercase().as_str()) {
            debug!("Exit requested");
            break;
        }

        let reply = service.handle_text(message, today).await;
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n\n").await?;
        output.flush().await?;
        handled += 1;
    }

    Ok(handled)
}

#[cfg(test)]
mod tests {
    use infrastructure::InMemoryLedgerStore;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 12).unwrap()
    }

    #[tokio::test]
    async fn records_then_summarises() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let service = build_service(&AppConfig::default(), store.clone());

        let input = "/pengeluaran 25000 makanan Makan siang\n\
                     /pemasukan 500000 gaji\n\
                     \n\
                     /rekapharian\n";
        let mut output = Vec::new();
        let handled = run(&service, today(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        assert_eq!(handled, 3);
        assert_eq!(store.len(), 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("✅ *Pengeluaran tercatat!*"));
        assert!(text.contains("📊 *Rekap Harian - 12 Agustus 2025*"));
        assert!(text.contains("📈 *Saldo Bersih: +Rp 475.000*"));
    }

    #[tokio::test]
    async fn exit_word_stops_the_session() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let service = build_service(&AppConfig::default(), store.clone());

        let input = "/help\n/exit\n/pemasukan 1 gaji\n";
        let mut output = Vec::new();
        let handled = run(&service, today(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        assert_eq!(handled, 1);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn free_text_without_backend_is_not_understood() {
        let service = build_service(&AppConfig::default(), Arc::new(InMemoryLedgerStore::new()));
        let mut output = Vec::new();
        run(&service, today(), "beli kopi 20 ribu\n".as_bytes(), &mut output)
            .await
            .unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("❓ Saya tidak mengerti"));
    }
}
