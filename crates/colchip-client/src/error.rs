//! Fetch error types.

use thiserror::Error;

/// Fetch errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Simulated remote failure.
    #[error("API Error: Failed to fetch columns")]
    Api,
}
