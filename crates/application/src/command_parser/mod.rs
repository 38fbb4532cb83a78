//! Command parser - Parse messenger text into typed ledger commands
//!
//! This module is split into focused sub-modules:
//! - [`slash_patterns`]: The table of `/command` handlers
//! - [`rejection`]: Typed parse failures and their user-facing replies

mod rejection;
mod slash_patterns;

use std::fmt;

use domain::LedgerCommand;
use tracing::debug;

pub use rejection::CommandRejection;

/// Parser for converting messenger text to [`LedgerCommand`]
///
/// Text starting with `/` is treated as a command; anything else is passed
/// through as [`LedgerCommand::FreeText`] for extraction.
pub struct CommandParser {
    /// Handlers for the known slash commands
    slash_patterns: Vec<SlashPattern>,
}

impl fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParser")
            .field("slash_patterns_count", &self.slash_patterns.len())
            .finish()
    }
}

/// A slash command and the function that parses its arguments
struct SlashPattern {
    /// Command names without the leading slash
    names: &'static [&'static str],
    /// Builds the command from the argument text after the name
    builder: fn(&str) -> Result<LedgerCommand, CommandRejection>,
}

impl CommandParser {
    /// Create a new command parser
    pub fn new() -> Self {
        Self {
            slash_patterns: Self::build_slash_patterns(),
        }
    }

    /// Parse one incoming message
    ///
    /// Command names are case-insensitive and may carry a `@botname` suffix
    /// (`/rekapharian@KasBot 12 Agustus 2025`).
    pub fn parse(&self, input: &str) -> Result<LedgerCommand, CommandRejection> {
        let trimmed = input.trim();
        let Some(body) = trimmed.strip_prefix('/') else {
            return Ok(LedgerCommand::FreeText {
                text: trimmed.to_string(),
            });
        };

        let (head, args) = body
            .split_once(char::is_whitespace)
            .map_or((body, ""), |(head, rest)| (head, rest.trim()));
        let name = head
            .split_once('@')
            .map_or(head, |(name, _bot)| name)
            .to_lowercase();

        let Some(pattern) = self
            .slash_patterns
            .iter()
            .find(|p| p.names.contains(&name.as_str()))
        else {
            debug!(command = %name, "Unknown slash command");
            return Err(CommandRejection::UnknownCommand(name));
        };

        let result = (pattern.builder)(args);
        match &result {
            Ok(cmd) => debug!(command = %cmd.description(), "Parsed slash command"),
            Err(rejection) => debug!(command = %name, %rejection, "Rejected slash command"),
        }
        result
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{Amount, DateInterval, TransactionKind};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_start_and_help() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("/start").unwrap(), LedgerCommand::Start);
        assert_eq!(parser.parse("/help").unwrap(), LedgerCommand::Help);
    }

    #[test]
    fn plain_text_is_free_text() {
        let parser = CommandParser::new();
        let cmd = parser.parse("  beli kopi 20 ribu ").unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::FreeText {
                text: "beli kopi 20 ribu".to_string()
            }
        );
    }

    #[test]
    fn parses_expense_command() {
        let parser = CommandParser::new();
        let cmd = parser
            .parse("/pengeluaran 25000 makanan Makan siang di warteg")
            .unwrap();

        let LedgerCommand::Record {
            kind,
            amount,
            category,
            description,
        } = cmd
        else {
            unreachable!("Expected Record command")
        };
        assert_eq!(kind, TransactionKind::Expense);
        assert_eq!(amount, Amount::from(25_000));
        assert_eq!(category, "makanan");
        assert_eq!(description, "Makan siang di warteg");
    }

    #[test]
    fn parses_income_command_without_description() {
        let parser = CommandParser::new();
        let cmd = parser.parse("/pemasukan 500000 gaji").unwrap();

        let LedgerCommand::Record {
            kind, description, ..
        } = cmd
        else {
            unreachable!("Expected Record command")
        };
        assert_eq!(kind, TransactionKind::Income);
        assert!(description.is_empty());
    }

    #[test]
    fn record_needs_amount_and_category() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/pengeluaran 25000").unwrap_err(),
            CommandRejection::MissingRecordArguments(TransactionKind::Expense)
        );
        assert_eq!(
            parser.parse("/pemasukan").unwrap_err(),
            CommandRejection::MissingRecordArguments(TransactionKind::Income)
        );
    }

    #[test]
    fn record_rejects_bad_amounts() {
        let parser = CommandParser::new();
        assert!(matches!(
            parser.parse("/pengeluaran dua_puluh makanan").unwrap_err(),
            CommandRejection::InvalidAmount(_)
        ));
        assert!(matches!(
            parser.parse("/pengeluaran -5000 makanan").unwrap_err(),
            CommandRejection::InvalidAmount(_)
        ));
    }

    #[test]
    fn command_names_ignore_case_and_bot_suffix() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("/HELP").unwrap(), LedgerCommand::Help);
        assert_eq!(
            parser.parse("/RekapHarian@KasBot 12 Agustus 2025").unwrap(),
            LedgerCommand::DailySummary {
                date: Some(ymd(2025, 8, 12))
            }
        );
    }

    #[test]
    fn daily_summary_without_date_defaults_later() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekapharian").unwrap(),
            LedgerCommand::DailySummary { date: None }
        );
    }

    #[test]
    fn daily_summary_rejects_bad_date() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekapharian 31 Februari 2025").unwrap_err(),
            CommandRejection::InvalidDate
        );
    }

    #[test]
    fn parses_custom_summary_ranges() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekapcustom 12-15 Agustus 2025").unwrap(),
            LedgerCommand::CustomSummary {
                interval: DateInterval::new(ymd(2025, 8, 12), ymd(2025, 8, 15)).unwrap()
            }
        );
        assert_eq!(
            parser
                .parse("/rekapcustom 29 Juli 2025 - 2 Agustus 2025")
                .unwrap(),
            LedgerCommand::CustomSummary {
                interval: DateInterval::new(ymd(2025, 7, 29), ymd(2025, 8, 2)).unwrap()
            }
        );
    }

    #[test]
    fn custom_summary_requires_a_valid_range() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekapcustom").unwrap_err(),
            CommandRejection::MissingRange
        );
        assert_eq!(
            parser.parse("/rekapcustom 15-12 Agustus 2025").unwrap_err(),
            CommandRejection::InvalidRange
        );
    }

    #[test]
    fn parses_monthly_summary() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekapbulanan Agustus 2025").unwrap(),
            LedgerCommand::MonthlySummary {
                month: Some(ymd(2025, 8, 1))
            }
        );
        assert_eq!(
            parser.parse("/rekapbulanan").unwrap(),
            LedgerCommand::MonthlySummary { month: None }
        );
        assert_eq!(
            parser.parse("/rekapbulanan Augustus 2025").unwrap_err(),
            CommandRejection::InvalidMonth
        );
    }

    #[test]
    fn parses_yearly_summary() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/rekaptahunan 2024").unwrap(),
            LedgerCommand::YearlySummary { year: Some(2024) }
        );
        assert_eq!(
            parser.parse("/rekaptahunan").unwrap(),
            LedgerCommand::YearlySummary { year: None }
        );
        assert_eq!(
            parser.parse("/rekaptahunan tahun_ini").unwrap_err(),
            CommandRejection::InvalidYear
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("/hapus 3").unwrap_err(),
            CommandRejection::UnknownCommand("hapus".to_string())
        );
    }

    #[test]
    fn debug_hides_pattern_table() {
        let debug = format!("{:?}", CommandParser::new());
        assert!(debug.contains("slash_patterns_count"));
    }
}
