//! Common types shared across the config store crates.

#![warn(clippy::pedantic)]

/// Module for the entity types persisted by the store
pub mod types;

/// Module for entity name validation
pub mod names;

/// Module for common configuration
pub mod config;

/// Module for tracing subscriber setup
pub mod observability;
