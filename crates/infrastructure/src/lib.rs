//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! process-wide concerns: configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, LedgerConfig, TelemetryAppConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_tracing};
