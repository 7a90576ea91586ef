//! Scheduler configuration.
//!
//! Controls seeding, the optional retry cap, the uniqueness preference,
//! and how statistics trials run. Loadable from TOML so that repeated
//! runs can share settings without code changes.
//!
//! ```
//! use u_roundrobin::SchedulerConfig;
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     random_seed = 7
//!     max_retries = 1000
//!     parallel_trials = true
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.max_retries, Some(1000));
//! assert!(config.prefer_unique_sets);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Round-robin scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Seed for reproducible runs. `None` seeds from the OS on every run.
    pub random_seed: Option<u64>,

    /// Retries allowed before giving up. `None` retries without limit.
    pub max_retries: Option<u64>,

    /// Prefer matchups that keep opponent sets distinct within a week.
    pub prefer_unique_sets: bool,

    /// Run statistics trials on the rayon thread pool.
    pub parallel_trials: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_retries: None,
            prefer_unique_sets: true,
            parallel_trials: false,
        }
    }
}

impl SchedulerConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Caps the number of retries.
    pub fn with_max_retries(mut self, max_retries: u64) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Enables or disables the uniqueness preference.
    pub fn with_unique_preference(mut self, enabled: bool) -> Self {
        self.prefer_unique_sets = enabled;
        self
    }

    /// Runs statistics trials in parallel.
    pub fn with_parallel_trials(mut self, parallel: bool) -> Self {
        self.parallel_trials = parallel;
        self
    }
}
