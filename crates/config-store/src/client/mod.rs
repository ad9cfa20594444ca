//! Parameter service clients.
//!
//! # Components
//!
//! - `ssm` - AWS Systems Manager Parameter Store client
//! - `memory` - In-process client with optional simulated propagation delay

pub mod memory;
pub mod ssm;

pub use memory::InMemoryParameterClient;
pub use ssm::SsmParameterClient;

use thiserror::Error;

/// A stored parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Full parameter path.
    pub name: String,
    /// Stored string value.
    pub value: String,
}

/// Result of a put-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The parameter was written.
    Created,
    /// A parameter already occupies the path. Nothing was written.
    AlreadyExists,
}

/// Parameter client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Parameter service request failed: {0}")]
    Request(String),

    #[error("Parameter service returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Operations the store needs from a hierarchical key-value service.
#[async_trait::async_trait]
pub trait ParameterClient: Send + Sync {
    /// Write `value` at `name` unless a parameter already exists there.
    async fn put_if_absent(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<PutOutcome, ClientError>;

    /// Read the value at `name`, or `None` if nothing is stored there.
    async fn get(&self, name: &str) -> Result<Option<String>, ClientError>;

    /// List parameters one level below `path` (which ends with `/`).
    ///
    /// Implementations follow pagination until the listing is complete.
    async fn list_children(&self, path: &str) -> Result<Vec<Parameter>, ClientError>;
}
