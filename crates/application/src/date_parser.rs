//! Indonesian date phrase parsing
//!
//! Turns phrases such as `"12 Agustus 2025"`, `"Agustus 2025"`,
//! `"12-15 Agustus 2025"` or `"29 Juli 2025 - 2 Agustus 2025"` into calendar
//! values, and renders dates back into the same vocabulary.
//!
//! Every parser is total: malformed text and impossible dates (31 Februari)
//! both come back as `None`, never as a panic. Matching is anchored at the
//! start of the trimmed input and anything after a complete match is ignored,
//! so conversational tails like `"12 Agustus 2025 ya"` still parse.

use chrono::{Datelike, NaiveDate};
use domain::DateInterval;
use tracing::debug;

/// Recognised month words, lowercase, with their month number
const MONTH_VOCABULARY: [(&str, u32); 23] = [
    ("januari", 1),
    ("jan", 1),
    ("februari", 2),
    ("feb", 2),
    ("maret", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("mei", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("agustus", 8),
    ("agu", 8),
    ("september", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("desember", 12),
    ("des", 12),
];

/// Canonical month names used for formatting, indexed by `month0`
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Separator between the two halves of a cross-month range
const RANGE_SEPARATOR: &str = " - ";

/// Look up a month number from an Indonesian month name or abbreviation
///
/// Matching is case-insensitive; surrounding whitespace is not trimmed.
#[must_use]
pub fn month_number(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    MONTH_VOCABULARY
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, number)| *number)
}

/// Canonical Indonesian name for a month number (1-12)
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Parse `"<day> <month> <year>"`, e.g. `"12 Agustus 2025"`
///
/// The day has one or two digits and the year exactly four. Returns `None`
/// for an unknown month word or a day that does not exist in that month.
pub fn parse_single_date(input: &str) -> Option<NaiveDate> {
    let normalized = input.trim().to_lowercase();
    let result = scan_single_date(&mut Scanner::new(&normalized));

    if result.is_none() {
        debug!(input = %input, "Failed to parse Indonesian date");
    }
    result
}

/// Parse `"<month> <year>"`, e.g. `"Agustus 2025"`, into the first day of that month
pub fn parse_month_year(input: &str) -> Option<NaiveDate> {
    let normalized = input.trim().to_lowercase();
    let result = scan_month_year(&mut Scanner::new(&normalized));

    if result.is_none() {
        debug!(input = %input, "Failed to parse Indonesian month/year");
    }
    result
}

/// Parse a date range
///
/// Two forms are accepted, tried in this order:
/// 1. same month: `"12-15 Agustus 2025"`
/// 2. cross month: `"29 Juli 2025 - 2 Agustus 2025"` (the separator is
///    exactly space, hyphen, space)
///
/// Ranges whose start falls after their end are rejected.
pub fn parse_date_range(input: &str) -> Option<DateInterval> {
    let normalized = input.trim().to_lowercase();

    let bounds = match scan_same_month_range(&mut Scanner::new(&normalized)) {
        SameMonthRange::Parsed(start, end) => Some((start, end)),
        SameMonthRange::InvalidDay => None,
        SameMonthRange::NoMatch => parse_cross_month_range(&normalized),
    };

    let Some((start, end)) = bounds else {
        debug!(input = %input, "Failed to parse Indonesian date range");
        return None;
    };

    match DateInterval::new(start, end) {
        Ok(interval) => Some(interval),
        Err(e) => {
            debug!(input = %input, error = %e, "Rejected inverted date range");
            None
        },
    }
}

/// Parse a four-digit year from the first word of the input, e.g. `"2025"`
pub fn parse_year(input: &str) -> Option<i32> {
    let result = input
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .filter(|year| (1..=9999).contains(year));

    if result.is_none() {
        debug!(input = %input, "Failed to parse year");
    }
    result
}

/// Render a date as `"12 Agustus 2025"`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

/// Render a date's month as `"Agustus 2025"`
#[must_use]
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// Render an interval as `"29 Juli 2025 - 2 Agustus 2025"`
#[must_use]
pub fn format_interval(interval: &DateInterval) -> String {
    format!(
        "{}{RANGE_SEPARATOR}{}",
        format_date(interval.start()),
        format_date(interval.end())
    )
}

fn scan_month_year(scanner: &mut Scanner<'_>) -> Option<NaiveDate> {
    let month = month_number(scanner.word()?)?;
    scanner.whitespace()?;
    let year = scanner.year()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn scan_single_date(scanner: &mut Scanner<'_>) -> Option<NaiveDate> {
    let day = scanner.day()?;
    scanner.whitespace()?;
    let month = month_number(scanner.word()?)?;
    scanner.whitespace()?;
    let year = scanner.year()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Outcome of the same-month grammar
enum SameMonthRange {
    /// Both days resolved
    Parsed(NaiveDate, NaiveDate),
    /// Grammar and month matched but a day does not exist
    InvalidDay,
    /// Grammar or month did not match; the cross-month form may still apply
    NoMatch,
}

/// `<day>-<day> <month> <year>` as raw numbers, days not yet validated
fn scan_same_month_parts(scanner: &mut Scanner<'_>) -> Option<(u32, u32, u32, i32)> {
    let start_day = scanner.day()?;
    scanner.literal('-')?;
    let end_day = scanner.day()?;
    scanner.whitespace()?;
    let month = month_number(scanner.word()?)?;
    scanner.whitespace()?;
    let year = scanner.year()?;
    Some((start_day, end_day, month, year))
}

fn scan_same_month_range(scanner: &mut Scanner<'_>) -> SameMonthRange {
    let Some((start_day, end_day, month, year)) = scan_same_month_parts(scanner) else {
        return SameMonthRange::NoMatch;
    };

    match (
        NaiveDate::from_ymd_opt(year, month, start_day),
        NaiveDate::from_ymd_opt(year, month, end_day),
    ) {
        (Some(start), Some(end)) => SameMonthRange::Parsed(start, end),
        _ => SameMonthRange::InvalidDay,
    }
}

fn parse_cross_month_range(input: &str) -> Option<(NaiveDate, NaiveDate)> {
    if !input.contains(RANGE_SEPARATOR) {
        return None;
    }

    let parts: Vec<&str> = input.split(RANGE_SEPARATOR).collect();
    let [start, end] = parts.as_slice() else {
        return None;
    };

    Some((parse_single_date(start)?, parse_single_date(end)?))
}

/// Forward-only cursor over already-normalised input
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Take up to `max` leading ASCII digits, requiring at least `min`
    fn digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(digits)
    }

    /// Day of month: one or two digits
    fn day(&mut self) -> Option<u32> {
        self.digits(1, 2)?.parse().ok()
    }

    /// Exactly four digits; year zero does not exist
    fn year(&mut self) -> Option<i32> {
        self.digits(4, 4)?.parse().ok().filter(|year| *year >= 1)
    }

    /// One or more whitespace characters
    fn whitespace(&mut self) -> Option<()> {
        let trimmed = self.rest.trim_start();
        if trimmed.len() == self.rest.len() {
            return None;
        }
        self.rest = trimmed;
        Some(())
    }

    /// Longest run of word characters (letters, digits, underscore)
    fn word(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
            .map_or(self.rest.len(), |(i, _)| i);
        if end == 0 {
            return None;
        }
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// A single expected character
    fn literal(&mut self, expected: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }
}
