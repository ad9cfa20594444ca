//! Common configuration types for the config store crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ObservabilityConfigError {
    #[error("Invalid LOG_FORMAT: expected 'json' or 'text', got '{0}'")]
    InvalidLogFormat(String),
}

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log filter directives (e.g., "info,config_store=debug")
    pub log_filter: String,
    /// Enable JSON-formatted logs
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FORMAT` is set to an unknown format.
    pub fn from_env() -> Result<Self, ObservabilityConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FORMAT` is set to an unknown format.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ObservabilityConfigError> {
        let log_filter = vars
            .get("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let json_logs = match vars.get("LOG_FORMAT").map(|v| v.to_ascii_lowercase()) {
            None => false,
            Some(format) if format == "json" => true,
            Some(format) if format == "text" => false,
            Some(format) => return Err(ObservabilityConfigError::InvalidLogFormat(format)),
        };

        Ok(Self {
            log_filter,
            json_logs,
        })
    }
}
