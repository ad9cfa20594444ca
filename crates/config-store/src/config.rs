//! Config store configuration.
//!
//! Configuration is loaded from environment variables. Credentials are
//! not part of it: the AWS default provider chain resolves them.

use common::names::validate_name;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default root segment under which all entities are stored.
pub const DEFAULT_ROOT: &str = "archer";

/// Config store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Root path segment (default: "archer").
    pub root: String,

    /// Region override. When unset the AWS default chain decides.
    pub region: Option<String>,

    /// Endpoint override for the parameter service (e.g., a local emulator).
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid CONFIG_STORE_ROOT '{value}': {reason}")]
    InvalidRoot { value: String, reason: String },

    #[error("Invalid CONFIG_STORE_ENDPOINT_URL '{0}': must start with http:// or https://")]
    InvalidEndpointUrl(String),
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let root = vars
            .get("CONFIG_STORE_ROOT")
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());

        validate_name(&root).map_err(|e| ConfigError::InvalidRoot {
            value: root.clone(),
            reason: e.to_string(),
        })?;

        let region = non_empty(vars.get("AWS_REGION"));

        let endpoint_url = non_empty(vars.get("CONFIG_STORE_ENDPOINT_URL"));
        if let Some(url) = &endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpointUrl(url.clone()));
            }
        }

        Ok(Self {
            root,
            region,
            endpoint_url,
        })
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.root, "archer");
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_vars(&vars(&[
            ("CONFIG_STORE_ROOT", "copilot"),
            ("AWS_REGION", "eu-west-1"),
            ("CONFIG_STORE_ENDPOINT_URL", "http://localhost:4566"),
        ]))
        .unwrap();

        assert_eq!(config.root, "copilot");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_blank_region_is_unset() {
        let config = StoreConfig::from_vars(&vars(&[("AWS_REGION", "")])).unwrap();
        assert!(config.region.is_none());
    }

    #[test]
    fn test_root_with_separator_rejected() {
        let err = StoreConfig::from_vars(&vars(&[("CONFIG_STORE_ROOT", "a/b")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoot { .. }));
    }

    #[test]
    fn test_endpoint_without_scheme_rejected() {
        let err = StoreConfig::from_vars(&vars(&[("CONFIG_STORE_ENDPOINT_URL", "localhost:4566")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpointUrl(_)));
    }
}
