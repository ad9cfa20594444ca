//! # Config Store Test Utilities
//!
//! Shared test utilities for the config store.
//!
//! This crate provides:
//! - Per-run seeded identifier generation (`IdGenerator`)
//! - Entity builders with the fixed values used across tests
//! - Bounded polling for eventually consistent reads (`assert_eventually`)
//! - An in-memory store harness (`TestStore`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use config_store_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let harness = TestStore::new();
//!     let project = TestProjectBuilder::new().build();
//!
//!     harness.store.create_project(&project).await.unwrap();
//!     harness.store.create_environment(&TestEnvironmentBuilder::new(&project.name).build())
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod builders;
pub mod eventual;
pub mod harness;
pub mod test_ids;

// Re-export commonly used items
pub use builders::*;
pub use eventual::*;
pub use harness::*;
pub use test_ids::*;
