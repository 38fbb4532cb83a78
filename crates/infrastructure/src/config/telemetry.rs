//! Logging configuration

use serde::{Deserialize, Serialize};

use crate::telemetry::{LogFormat, TelemetryConfig};

pub(super) const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter and output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Human-readable text or JSON lines
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl From<&TelemetryAppConfig> for TelemetryConfig {
    fn from(config: &TelemetryAppConfig) -> Self {
        Self {
            log_filter: config.log_filter.clone(),
            format: config.log_format,
        }
    }
}
