//! Summary service - Period totals and their messenger rendering
//!
//! Aggregation is a pure function of the records it is given. The ledger
//! store has already filtered them to the requested period; nothing here
//! looks at dates.

use std::fmt::Write as _;

use domain::{Amount, DomainError, LedgerRecord, TransactionKind};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summed amount per category, in the order categories were first seen
pub type CategorySummary = IndexMap<String, Amount>;

/// Records of one period, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodSummary {
    /// Expense records in input order
    pub expenses: Vec<LedgerRecord>,
    /// Income records in input order
    pub income: Vec<LedgerRecord>,
}

impl PeriodSummary {
    /// Check if the period has no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.income.is_empty()
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Result<Amount, DomainError> {
        Amount::checked_sum(self.income.iter().map(|r| r.amount))
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Result<Amount, DomainError> {
        Amount::checked_sum(self.expenses.iter().map(|r| r.amount))
    }

    /// Income minus expenses; negative when more went out than came in
    ///
    /// Both totals are non-negative, so only the totals themselves can
    /// overflow.
    pub fn net(&self) -> Result<Decimal, DomainError> {
        Ok(self.total_income()?.value() - self.total_expenses()?.value())
    }

    /// Income totals per category
    pub fn income_by_category(&self) -> Result<CategorySummary, DomainError> {
        totals_by_category(&self.income)
    }

    /// Expense totals per category
    pub fn expenses_by_category(&self) -> Result<CategorySummary, DomainError> {
        totals_by_category(&self.expenses)
    }
}

/// Partition records into expenses and income, keeping their relative order
#[must_use]
pub fn summarize(records: &[LedgerRecord]) -> PeriodSummary {
    let (expenses, income) = records
        .iter()
        .cloned()
        .partition(|r| r.kind == TransactionKind::Expense);
    PeriodSummary { expenses, income }
}

/// Sum amounts per category
///
/// Categories are compared verbatim and only categories present in the
/// input appear in the output. Fails if a category total overflows.
pub fn totals_by_category(records: &[LedgerRecord]) -> Result<CategorySummary, DomainError> {
    let mut totals = CategorySummary::new();
    for record in records {
        let entry = totals.entry(record.category.clone()).or_insert(Amount::ZERO);
        *entry = entry.checked_add(record.amount)?;
    }
    Ok(totals)
}

/// How amounts are printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Prefix placed before every amount
    pub label: String,
    /// Digit group separator
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            label: "Rp".to_string(),
            thousands_separator: '.',
        }
    }
}

/// Renders period summaries for the messenger
///
/// Holds only immutable formatting settings, so one instance can be shared
/// across all requests.
#[derive(Debug, Clone, Default)]
pub struct SummaryService {
    currency: CurrencyFormat,
}

impl SummaryService {
    /// Create a summary service with the given currency format
    pub const fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    /// The configured currency format
    pub const fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Format an amount as `"Rp 460.000"`
    ///
    /// The value is rounded to whole units (ties to even) and its sign is
    /// dropped; callers print the sign themselves.
    #[must_use]
    pub fn format_amount(&self, value: Decimal) -> String {
        format!(
            "{} {}",
            self.currency.label,
            group_digits(value, self.currency.thousands_separator)
        )
    }

    /// Render a summary under `title`
    ///
    /// Income comes before expenses, each with its total and per-category
    /// subtotals; a net balance line closes the message. An empty period
    /// renders only the title and a "no data" notice. Totals too large to
    /// represent are an error rather than a wrapped number.
    pub fn render_summary(
        &self,
        summary: &PeriodSummary,
        title: &str,
    ) -> Result<String, DomainError> {
        if summary.is_empty() {
            return Ok(format!("📊 *{title}*\n\n❌ Tidak ada data untuk periode ini."));
        }

        let mut message = format!("📊 *{title}*\n\n");

        if !summary.income.is_empty() {
            self.push_section(
                &mut message,
                "💰 *Total Pemasukan",
                summary.total_income()?,
                &summary.income_by_category()?,
            );
        }

        if !summary.expenses.is_empty() {
            self.push_section(
                &mut message,
                "💸 *Total Pengeluaran",
                summary.total_expenses()?,
                &summary.expenses_by_category()?,
            );
        }

        message.push_str(&self.net_line(summary.net()?));
        Ok(message)
    }

    fn push_section(
        &self,
        message: &mut String,
        heading: &str,
        total: Amount,
        by_category: &CategorySummary,
    ) {
        let _ = writeln!(message, "{heading}: {}*", self.format_amount(total.value()));
        for (category, amount) in by_category {
            let _ = writeln!(message, "  • {category}: {}", self.format_amount(amount.value()));
        }
        message.push('\n');
    }

    fn net_line(&self, net: Decimal) -> String {
        if net > Decimal::ZERO {
            format!("📈 *Saldo Bersih: +{}*", self.format_amount(net))
        } else if net < Decimal::ZERO {
            format!("📉 *Saldo Bersih: -{}*", self.format_amount(net))
        } else {
            format!("⚖️ *Saldo Bersih: {}*", self.format_amount(Decimal::ZERO))
        }
    }
}

/// Whole-unit absolute value with digit groups of three
fn group_digits(value: Decimal, separator: char) -> String {
    let whole = value.abs().round_dp(0).trunc().to_string();
    let digits = whole.split('.').next().unwrap_or("0");

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
