//! Query layer configuration.
//!
//! The currency identifier is process-wide and immutable: it is read once,
//! validated, and handed to every component at construction.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ConfigError;

/// Default currency when none is configured
pub const DEFAULT_CURRENCY: &str = "g1";

/// Ledger query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Currency identifier echoed in every response envelope
    pub currency: String,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl QueryConfig {
    /// Create a validated configuration for the given currency
    pub fn new(currency: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            currency: currency.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_CURRENCY`: Currency identifier (default: g1)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            currency: env::var("QC_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            log_level: env::var("QC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
            json_logs: env::var("QC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.is_empty() || self.currency.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidCurrency(self.currency.clone()));
        }
        Ok(())
    }
}
