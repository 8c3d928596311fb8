//! Fetch service configuration.

use std::time::Duration;

/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Default probability that a fetch fails.
pub const DEFAULT_FAILURE_PROBABILITY: f64 = 0.05;

/// Fetch service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Time every fetch waits before resolving, on success and on failure.
    pub delay: Duration,

    /// Probability in `[0, 1]` that a fetch fails.
    pub failure_probability: f64,
}

impl FetchConfig {
    /// Create a configuration with the default delay and failure rate.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            failure_probability: DEFAULT_FAILURE_PROBABILITY,
        }
    }

    /// Set the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the failure probability, clamped to `[0, 1]`.
    pub fn with_failure_probability(mut self, probability: f64) -> Self {
        self.failure_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Never fail.
    pub fn never_fail(self) -> Self {
        self.with_failure_probability(0.0)
    }

    /// Always fail.
    pub fn always_fail(self) -> Self {
        self.with_failure_probability(1.0)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}
