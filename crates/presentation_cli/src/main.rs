//! Kasbot CLI
//!
//! Command-line interface for the ledger assistant: talk to a local ledger
//! the way the messenger bot would, or check how dates are understood.

#![allow(clippy::print_stdout)]

mod session;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{date_parser, ports::LedgerStorePort};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use infrastructure::{
    AppConfig, InMemoryLedgerStore, JsonFileLedgerStore, TelemetryConfig, init_tracing,
};
use tokio::io::BufReader;
use tracing::info;

/// Kasbot CLI
#[derive(Parser)]
#[command(name = "kasbot-cli")]
#[command(author, version, about = "Kasbot expense ledger CLI", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(short, long, env = "KASBOT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one message and print the reply
    ///
    /// Example: kasbot-cli send --ledger ledger.json /rekapbulanan Agustus 2025
    Send {
        /// Message text, e.g. "/pengeluaran 25000 makanan Makan siang"
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,

        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Read messages from stdin, one per line, and print each reply
    Chat {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Show how a date expression is understood
    ///
    /// Example: kasbot-cli parse range "29 Juli 2025 - 2 Agustus 2025"
    Parse {
        /// Which grammar to apply
        #[arg(value_enum)]
        kind: ParseKind,

        /// Text to parse
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        input: Vec<String>,
    },
}

#[derive(clap::Args)]
struct LedgerArgs {
    /// JSON ledger file; records are kept in memory when omitted
    #[arg(short, long, env = "KASBOT_LEDGER")]
    ledger: Option<PathBuf>,

    /// Date used as "today" (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ParseKind {
    /// "12 Agustus 2025"
    Date,
    /// "Agustus 2025"
    Month,
    /// "12-15 Agustus 2025" or "29 Juli 2025 - 2 Agustus 2025"
    Range,
    /// "2025"
    Year,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Describe a parse result, or `None` if the input was not understood
fn describe_parse(kind: ParseKind, input: &str) -> Option<String> {
    match kind {
        ParseKind::Date => date_parser::parse_single_date(input)
            .map(|date| format!("{date} ({})", date_parser::format_date(date))),
        ParseKind::Month => date_parser::parse_month_year(input)
            .map(|month| format!("{} ({})", month.format("%Y-%m"), date_parser::format_month_year(month))),
        ParseKind::Range => date_parser::parse_date_range(input).map(|interval| {
            format!(
                "{interval} ({}, {} days)",
                date_parser::format_interval(&interval),
                interval.num_days()
            )
        }),
        ParseKind::Year => date_parser::parse_year(input).map(|year| year.to_string()),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate()?;
    Ok(config)
}

async fn open_store(path: Option<&PathBuf>) -> anyhow::Result<Arc<dyn LedgerStorePort>> {
    Ok(match path {
        Some(path) => Arc::new(JsonFileLedgerStore::open(path).await?),
        None => Arc::new(InMemoryLedgerStore::new()),
    })
}

fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let mut telemetry = TelemetryConfig::from(&config.telemetry);
    if cli.verbose > 0 {
        telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&telemetry)?;
    info!(environment = %config.environment, "Kasbot CLI started");

    match cli.command {
        Commands::Send { message, ledger } => {
            let store = open_store(ledger.ledger.as_ref()).await?;
            let service = session::build_service(&config, store);
            let reply = service
                .handle_text(&message.join(" "), today_or_local(ledger.today))
                .await;
            println!("{reply}");
        },

        Commands::Chat { ledger } => {
            let store = open_store(ledger.ledger.as_ref()).await?;
            let service = session::build_service(&config, store);
            let handled = session::run(
                &service,
                today_or_local(ledger.today),
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
            info!(handled, "Chat session ended");
        },

        Commands::Parse { kind, input } => {
            let input = input.join(" ");
            match describe_parse(kind, &input) {
                Some(description) => println!("✅ {description}"),
                None => {
                    println!("❌ Tidak dapat memahami: {input}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
