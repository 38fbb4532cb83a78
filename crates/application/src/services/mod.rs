//! Application services - Use case implementations

mod ledger_replies;
mod ledger_service;
mod summary_service;

pub use ledger_replies::{HELP_MESSAGE, START_MESSAGE};
pub use ledger_service::LedgerService;
pub use summary_service::{
    CategorySummary, CurrencyFormat, PeriodSummary, SummaryService, summarize, totals_by_category,
};
