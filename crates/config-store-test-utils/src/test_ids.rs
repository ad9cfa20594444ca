//! Test identifiers and fixed fixture values.
//!
//! Project names must be unique per run because live tests share one
//! parameter store. `IdGenerator` draws them from a seeded `StdRng` that is
//! created once per test process. The seed is logged so a failing run can be
//! replayed with `CONFIG_STORE_TEST_SEED=<seed>`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, OnceLock};

/// Environment variable that pins the run seed.
pub const TEST_SEED_ENV: &str = "CONFIG_STORE_TEST_SEED";

/// Length of generated project names.
pub const TEST_PROJECT_NAME_LEN: usize = 10;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Fixed fixture values
pub const TEST_PROJECT_VERSION: &str = "1.0";
pub const TEST_REGION: &str = "us-west-2";
pub const TEST_ACCOUNT_ID: &str = " 1234";
pub const TEST_APPLICATION_TYPE: &str = "LBFargateService";

// Environment names
pub const TEST_ENV_TEST: &str = "test";
pub const TEST_ENV_PROD: &str = "prod";

// Application names
pub const TEST_APP_API: &str = "api";
pub const TEST_APP_FRONT_END: &str = "front-end";

/// Seeded source of unique test names.
pub struct IdGenerator {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl IdGenerator {
    /// Create a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a generator seeded from `CONFIG_STORE_TEST_SEED`, or from
    /// entropy when unset.
    pub fn from_env() -> Self {
        let seed = std::env::var(TEST_SEED_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or_else(rand::random);
        Self::with_seed(seed)
    }

    /// The generator for this test process, created on first use.
    pub fn for_run() -> &'static IdGenerator {
        static RUN: OnceLock<IdGenerator> = OnceLock::new();
        RUN.get_or_init(|| {
            let generator = IdGenerator::from_env();
            tracing::info!(seed = generator.seed(), "Test identifier seed (set {TEST_SEED_ENV} to replay)");
            generator
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random ASCII-letter string of length `len`.
    pub fn letters(&self, len: usize) -> String {
        let mut rng = self.rng.lock().expect("IdGenerator lock poisoned");
        (0..len)
            .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }

    /// Fresh project name.
    pub fn project_name(&self) -> String {
        self.letters(TEST_PROJECT_NAME_LEN)
    }
}
