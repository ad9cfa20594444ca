//! In-memory store harness and test tracing setup.

use common::config::ObservabilityConfig;
use common::observability::init_tracing;
use config_store::{HierarchicalConfigStore, InMemoryParameterClient};
use std::sync::{Arc, Once};
use std::time::Duration;

/// Root segment used by harness stores.
pub const TEST_ROOT: &str = "archer";

/// A store over an in-memory parameter client.
///
/// The client is exposed so tests can inspect raw parameters or write
/// counts.
pub struct TestStore {
    pub store: HierarchicalConfigStore,
    pub client: Arc<InMemoryParameterClient>,
}

impl TestStore {
    /// Store where writes are visible immediately.
    pub fn new() -> Self {
        Self::from_client(InMemoryParameterClient::new())
    }

    /// Store where writes become visible after `delay`.
    pub fn with_visibility_delay(delay: Duration) -> Self {
        Self::from_client(InMemoryParameterClient::with_visibility_delay(delay))
    }

    fn from_client(client: InMemoryParameterClient) -> Self {
        init_test_tracing();
        let client = Arc::new(client);
        let store = HierarchicalConfigStore::new(client.clone(), TEST_ROOT)
            .expect("TEST_ROOT is a valid root");
        Self { store, client }
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a tracing subscriber once per test process.
///
/// Honors `RUST_LOG` and `LOG_FORMAT`. A subscriber installed elsewhere
/// is left in place.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let config = ObservabilityConfig::from_env().unwrap_or_default();
        let _ = init_tracing(&config);
    });
}
