//! In-process parameter client.
//!
//! Stores parameters in a sorted map. With a visibility delay configured,
//! a write stays hidden from `get` and `list_children` until the delay has
//! elapsed, mimicking the propagation window of the real service.
//! Conflict detection in `put_if_absent` always sees every write.

use super::{ClientError, Parameter, ParameterClient, PutOutcome};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug)]
struct StoredParameter {
    value: String,
    description: String,
    written_at: Instant,
}

/// In-memory [`ParameterClient`].
#[derive(Debug, Default)]
pub struct InMemoryParameterClient {
    parameters: RwLock<BTreeMap<String, StoredParameter>>,
    visibility_delay: Duration,
    put_count: AtomicUsize,
}

impl InMemoryParameterClient {
    /// Create a client where writes are visible immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client where writes become visible to reads after `delay`.
    pub fn with_visibility_delay(delay: Duration) -> Self {
        Self {
            visibility_delay: delay,
            ..Self::default()
        }
    }

    /// Number of `put_if_absent` calls made, including rejected ones.
    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Number of stored parameters, visible or not.
    pub async fn len(&self) -> usize {
        self.parameters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.parameters.read().await.is_empty()
    }

    /// Description recorded for `name`, ignoring visibility.
    pub async fn description(&self, name: &str) -> Option<String> {
        self.parameters
            .read()
            .await
            .get(name)
            .map(|p| p.description.clone())
    }

    fn is_visible(&self, parameter: &StoredParameter) -> bool {
        parameter.written_at.elapsed() >= self.visibility_delay
    }
}

#[async_trait::async_trait]
impl ParameterClient for InMemoryParameterClient {
    async fn put_if_absent(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<PutOutcome, ClientError> {
        self.put_count.fetch_add(1, Ordering::SeqCst);

        let mut parameters = self.parameters.write().await;
        if parameters.contains_key(name) {
            return Ok(PutOutcome::AlreadyExists);
        }

        parameters.insert(
            name.to_string(),
            StoredParameter {
                value: value.to_string(),
                description: description.to_string(),
                written_at: Instant::now(),
            },
        );
        Ok(PutOutcome::Created)
    }

    async fn get(&self, name: &str) -> Result<Option<String>, ClientError> {
        let parameters = self.parameters.read().await;
        Ok(parameters
            .get(name)
            .filter(|p| self.is_visible(p))
            .map(|p| p.value.clone()))
    }

    async fn list_children(&self, path: &str) -> Result<Vec<Parameter>, ClientError> {
        if !path.ends_with('/') {
            return Err(ClientError::Request(format!(
                "listing path must end with '/', got {path}"
            )));
        }

        let parameters = self.parameters.read().await;
        let children = parameters
            .range::<str, _>((Bound::Included(path), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(path))
            .filter(|(name, _)| {
                name.strip_prefix(path)
                    .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
            })
            .filter(|(_, p)| self.is_visible(p))
            .map(|(name, p)| Parameter {
                name: name.clone(),
                value: p.value.clone(),
            })
            .collect();

        Ok(children)
    }
}
