//! Parameter Store Integration Test Suite
//!
//! This crate provides integration tests that exercise the config store
//! against a live AWS Systems Manager Parameter Store (or a compatible
//! emulator reached through `CONFIG_STORE_ENDPOINT_URL`).
//!
//! Every run creates projects with fresh names from the run's seeded
//! `IdGenerator`. Created parameters are not cleaned up.
//!
//! # Features
//!
//! - `integration`: Live create/get/list round-trips (~1min)
//! - `all`: Enable all test categories
//!
//! # Prerequisites
//!
//! 1. AWS credentials resolvable by the default provider chain
//! 2. `ssm:PutParameter`, `ssm:GetParameter` and `ssm:GetParametersByPath`
//!    on `/<root>/*` (root defaults to `archer`)
//! 3. Optionally `AWS_REGION`, `CONFIG_STORE_ROOT`, `CONFIG_STORE_ENDPOINT_URL`
//!
//! # Usage
//!
//! ```bash
//! # From repo root - runs 0 env-tests (no default features)
//! cargo test
//!
//! # Live Parameter Store round-trips
//! cargo test -p env-tests --features integration
//!
//! # Replay a failing run's project names
//! CONFIG_STORE_TEST_SEED=1234 cargo test -p env-tests --features integration
//! ```

pub mod connection;
