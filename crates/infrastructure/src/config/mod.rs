//! Application configuration
//!
//! Split into focused sub-modules:
//! - `ledger`: Currency rendering and default category
//! - `telemetry`: Log filter and output format
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `KASBOT_*` environment variables (`KASBOT_LEDGER__CURRENCY_LABEL=IDR`).

mod ledger;
mod telemetry;

use std::{fmt, path::Path};

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use ledger::LedgerConfig;
pub use telemetry::TelemetryAppConfig;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - verbose defaults
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Ledger rendering settings
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build(
        file: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("ledger.currency_label", ledger::DEFAULT_CURRENCY_LABEL)?
            .set_default(
                "ledger.thousands_separator",
                ledger::DEFAULT_THOUSANDS_SEPARATOR.to_string(),
            )?
            .set_default("ledger.default_category", domain::DEFAULT_CATEGORY)?
            .set_default("telemetry.log_filter", telemetry::DEFAULT_LOG_FILTER)?
            .set_default("telemetry.log_format", "text")?
            .add_source(file)
            // Override with environment variables (e.g., KASBOT_TELEMETRY__LOG_FORMAT)
            .add_source(
                config::Environment::with_prefix("KASBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(environment = %config.environment, "Configuration loaded");
        Ok(config)
    }

    /// Reject settings that would produce unreadable replies
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.ledger.validate()
    }
}
