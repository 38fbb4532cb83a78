//! Slash command table
//!
//! Each builder receives the argument text that follows the command name,
//! already trimmed.

use std::str::FromStr;

use domain::{Amount, LedgerCommand, TransactionKind};

use super::{CommandParser, CommandRejection, SlashPattern};
use crate::date_parser;

impl CommandParser {
    /// Build the list of slash command handlers
    pub(super) fn build_slash_patterns() -> Vec<SlashPattern> {
        vec![
            SlashPattern {
                names: &["start"],
                builder: |_| Ok(LedgerCommand::Start),
            },
            SlashPattern {
                names: &["help"],
                builder: |_| Ok(LedgerCommand::Help),
            },
            SlashPattern {
                names: &["pengeluaran"],
                builder: |args| parse_record(TransactionKind::Expense, args),
            },
            SlashPattern {
                names: &["pemasukan"],
                builder: |args| parse_record(TransactionKind::Income, args),
            },
            SlashPattern {
                names: &["rekapharian"],
                builder: |args| {
                    if args.is_empty() {
                        return Ok(LedgerCommand::DailySummary { date: None });
                    }
                    date_parser::parse_single_date(args)
                        .map(|date| LedgerCommand::DailySummary { date: Some(date) })
                        .ok_or(CommandRejection::InvalidDate)
                },
            },
            SlashPattern {
                names: &["rekapcustom"],
                builder: |args| {
                    if args.is_empty() {
                        return Err(CommandRejection::MissingRange);
                    }
                    date_parser::parse_date_range(args)
                        .map(|interval| LedgerCommand::CustomSummary { interval })
                        .ok_or(CommandRejection::InvalidRange)
                },
            },
            SlashPattern {
                names: &["rekapbulanan"],
                builder: |args| {
                    if args.is_empty() {
                        return Ok(LedgerCommand::MonthlySummary { month: None });
                    }
                    date_parser::parse_month_year(args)
                        .map(|month| LedgerCommand::MonthlySummary { month: Some(month) })
                        .ok_or(CommandRejection::InvalidMonth)
                },
            },
            SlashPattern {
                names: &["rekaptahunan"],
                builder: |args| {
                    if args.is_empty() {
                        return Ok(LedgerCommand::YearlySummary { year: None });
                    }
                    date_parser::parse_year(args)
                        .map(|year| LedgerCommand::YearlySummary { year: Some(year) })
                        .ok_or(CommandRejection::InvalidYear)
                },
            },
        ]
    }
}

/// `<amount> <category> [description...]`
fn parse_record(kind: TransactionKind, args: &str) -> Result<LedgerCommand, CommandRejection> {
    let mut words = args.split_whitespace();
    let (Some(amount), Some(category)) = (words.next(), words.next()) else {
        return Err(CommandRejection::MissingRecordArguments(kind));
    };

    let amount = Amount::from_str(amount)
        .map_err(|_| CommandRejection::InvalidAmount(amount.to_string()))?;
    let description = words.collect::<Vec<_>>().join(" ");

    Ok(LedgerCommand::Record {
        kind,
        amount,
        category: category.to_string(),
        description,
    })
}
