//! Core error types.

use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A chip path did not resolve to any column.
    #[error("unknown column path: {0}")]
    UnknownPath(String),
}
