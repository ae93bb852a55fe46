//! Application Configuration
//!
//! Configuration for the problem application layer.

use std::time::Duration;

/// Problem application configuration
#[derive(Debug, Clone)]
pub struct ProblemConfig {
    /// Deadline applied to every repository call
    pub store_timeout: Duration,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl ProblemConfig {
    pub fn with_store_timeout(store_timeout: Duration) -> Self {
        Self { store_timeout }
    }

    pub fn store_timeout_ms(&self) -> u64 {
        self.store_timeout.as_millis() as u64
    }
}
