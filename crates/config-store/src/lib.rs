//! Hierarchical config store.
//!
//! Persists projects, environments and applications in a remote
//! hierarchical parameter service (AWS Systems Manager Parameter Store).
//!
//! # Layout
//!
//! ```text
//! /<root>/<project>
//! /<root>/<project>/environments/<environment>
//! /<root>/<project>/applications/<application>
//! ```
//!
//! Writes are eventually consistent: a `get_*` or `list_*` issued right
//! after a `create_*` may not observe it yet. The store keeps no cache,
//! every call round-trips to the parameter service.
//!
//! # Usage
//!
//! ```rust,ignore
//! use common::types::Project;
//! use config_store::HierarchicalConfigStore;
//!
//! let store = HierarchicalConfigStore::from_env().await?;
//! store.create_project(&Project::new("billing", "1.0")).await?;
//! let project = store.get_project("billing").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod paths;
pub mod store;

pub use client::{InMemoryParameterClient, Parameter, ParameterClient, PutOutcome};
pub use config::StoreConfig;
pub use error::StoreError;
pub use store::HierarchicalConfigStore;
