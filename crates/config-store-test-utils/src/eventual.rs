//! Eventual consistency helpers for timing-dependent tests.
//!
//! Parameter path listings and reads lag behind writes. These helpers poll
//! with exponential backoff until a condition holds or a bounded timeout
//! expires.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Categories of eventual consistency with documented bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyCategory {
    /// Single-parameter reads after a write (observed propagation of a few seconds)
    ParameterRead,

    /// Non-recursive path listings after a write (2x the observed ~5s)
    PathListing,

    /// Caller-supplied bound (e.g., in-memory stores with a short simulated delay)
    Custom(Duration),
}

impl ConsistencyCategory {
    /// Get the maximum timeout for this consistency category.
    pub fn timeout(&self) -> Duration {
        match self {
            ConsistencyCategory::ParameterRead => Duration::from_secs(10),
            ConsistencyCategory::PathListing => Duration::from_secs(15),
            ConsistencyCategory::Custom(timeout) => *timeout,
        }
    }

    /// Get the initial retry delay for exponential backoff.
    fn initial_delay(&self) -> Duration {
        match self {
            ConsistencyCategory::Custom(timeout) => (*timeout / 10).max(Duration::from_millis(1)),
            _ => Duration::from_millis(500),
        }
    }
}

/// Poll `probe` until it yields `Some`, returning that value.
///
/// Uses exponential backoff with the following strategy:
/// - Initial delay: 500ms (a tenth of the timeout for `Custom`)
/// - Exponential multiplier: 2x
/// - Maximum attempts: Until timeout is reached
pub async fn eventually<T, F, Fut>(category: ConsistencyCategory, mut probe: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let timeout = category.timeout();
    let mut delay = category.initial_delay();
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        if let Some(value) = probe().await {
            return Ok(value);
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            return Err(format!(
                "Condition not met within {:?} after {} attempts (category: {:?})",
                timeout, attempts, category
            ));
        }

        // Cap delay at remaining time
        let remaining = timeout.saturating_sub(elapsed);
        sleep(delay.min(remaining)).await;

        // Exponential backoff with 2x multiplier
        delay *= 2;
    }
}

/// Assert that a condition becomes true within the timeout for the given consistency category.
///
/// # Example
///
/// ```no_run
/// use config_store_test_utils::eventual::{assert_eventually, ConsistencyCategory};
///
/// # async fn example(store: config_store::HierarchicalConfigStore) {
/// assert_eventually(ConsistencyCategory::PathListing, || async {
///     store
///         .list_environments("abcde12345")
///         .await
///         .map(|envs| envs.len() == 2)
///         .unwrap_or(false)
/// })
/// .await
/// .expect("Both environments should be listed within timeout");
/// # }
/// ```
pub async fn assert_eventually<F, Fut>(
    category: ConsistencyCategory,
    mut condition: F,
) -> Result<(), String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    eventually(category, || {
        let fut = condition();
        async move { fut.await.then_some(()) }
    })
    .await
}
