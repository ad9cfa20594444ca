//! Parameter Store connection and reachability check.
//!
//! This module provides the `ParameterStoreConnection` type for validating
//! that credentials, region and permissions are in place before running
//! tests, so failures point at the environment rather than the store.

use config_store::config::ConfigError;
use config_store::{HierarchicalConfigStore, StoreConfig, StoreError};
use config_store_test_utils::{init_test_tracing, IdGenerator};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Bound on the initial reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection errors.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Invalid store configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Parameter Store unreachable at /{root}/: {source}. Check AWS credentials, AWS_REGION and ssm:GetParametersByPath permissions")]
    Unreachable {
        root: String,
        #[source]
        source: StoreError,
    },

    #[error("Parameter Store did not answer within {0:?}")]
    Timeout(Duration),
}

/// Connection to the Parameter Store used by the live suite.
pub struct ParameterStoreConnection {
    pub store: HierarchicalConfigStore,
    pub config: StoreConfig,
}

impl ParameterStoreConnection {
    /// Connect using configuration from the environment.
    ///
    /// Lists the root path once to confirm the service is reachable.
    pub async fn new() -> Result<Self, ConnectionError> {
        Self::with_config(StoreConfig::from_env()?).await
    }

    /// Connect with an explicit configuration.
    pub async fn with_config(config: StoreConfig) -> Result<Self, ConnectionError> {
        init_test_tracing();

        let store = HierarchicalConfigStore::from_config(&config)
            .await
            .map_err(|source| ConnectionError::Unreachable {
                root: config.root.clone(),
                source,
            })?;

        match timeout(PROBE_TIMEOUT, store.list_projects()).await {
            Err(_) => return Err(ConnectionError::Timeout(PROBE_TIMEOUT)),
            Ok(Err(source)) => {
                return Err(ConnectionError::Unreachable {
                    root: config.root.clone(),
                    source,
                })
            }
            Ok(Ok(projects)) => {
                tracing::info!(
                    root = %config.root,
                    existing_projects = projects.len(),
                    seed = IdGenerator::for_run().seed(),
                    "Connected to Parameter Store"
                );
            }
        }

        Ok(Self { store, config })
    }
}
