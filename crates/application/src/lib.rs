//! Application layer - Use cases and orchestration
//!
//! Contains the Indonesian date grammar, the command parser, the summary
//! aggregator and the ledger service, plus the port definitions adapters
//! implement.

pub mod command_parser;
pub mod date_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::{CommandParser, CommandRejection};
pub use date_parser::{
    format_date, format_interval, format_month_year, parse_date_range, parse_month_year,
    parse_single_date, parse_year,
};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
