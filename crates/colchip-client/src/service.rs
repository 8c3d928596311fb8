//! Column fetch service.
//!
//! This module provides `ColumnService`, a stand-in for a remote columns
//! endpoint: every call waits the configured delay, then either returns the
//! whole catalog or fails with [`FetchError::Api`].

use std::sync::{Arc, OnceLock};

use colchip_core::{reference_catalog, Catalog, Column};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::random::{DrawSource, ThreadRngSource};

/// Mock asynchronous source of column definitions.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use colchip_client::{ColumnService, FetchConfig, FixedDraw};
///
/// #[tokio::main]
/// async fn main() {
///     let service = ColumnService::new(FetchConfig::new().with_delay(Duration::ZERO))
///         .with_source(FixedDraw(0.99));
///     let columns = service.fetch_columns().await.unwrap();
///     assert_eq!(columns[0].id, "col1");
/// }
/// ```
#[derive(Clone)]
pub struct ColumnService {
    catalog: Arc<Catalog>,
    config: FetchConfig,
    source: Arc<dyn DrawSource>,
}

impl ColumnService {
    /// Create a service over the reference catalog.
    pub fn new(config: FetchConfig) -> Self {
        Self {
            catalog: Arc::new(reference_catalog().clone()),
            config,
            source: Arc::new(ThreadRngSource),
        }
    }

    /// Serve a different catalog.
    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Use a different random source.
    pub fn with_source(mut self, source: impl DrawSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Get the service configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Get the catalog this service hands out.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fetch the column catalog.
    ///
    /// Resolves no sooner than the configured delay, whether it succeeds or
    /// fails. A failure carries no partial result and is not retried.
    pub async fn fetch_columns(&self) -> Result<Vec<Column>, FetchError> {
        tracing::debug!(
            delay_ms = self.config.delay.as_millis() as u64,
            "fetching columns"
        );

        tokio::time::sleep(self.config.delay).await;

        let draw = self.source.draw();
        if draw < self.config.failure_probability {
            tracing::warn!(
                draw,
                failure_probability = self.config.failure_probability,
                "column fetch failed"
            );
            return Err(FetchError::Api);
        }

        let columns = self.catalog.columns().to_vec();
        tracing::debug!(draw, columns = columns.len(), "columns fetched");
        Ok(columns)
    }
}

impl Default for ColumnService {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl std::fmt::Debug for ColumnService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnService")
            .field("config", &self.config)
            .field("columns", &self.catalog.len())
            .finish()
    }
}

/// Fetch the reference catalog with the default delay and failure rate.
pub async fn fetch_columns() -> Result<Vec<Column>, FetchError> {
    static DEFAULT: OnceLock<ColumnService> = OnceLock::new();
    DEFAULT.get_or_init(ColumnService::default).fetch_columns().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedDraw;
    use colchip_core::reference_columns;
    use std::time::Duration;

    fn instant(draw: f64) -> ColumnService {
        ColumnService::new(FetchConfig::new().with_delay(Duration::ZERO))
            .with_source(FixedDraw(draw))
    }

    #[tokio::test]
    async fn test_success_returns_catalog() {
        let columns = instant(0.5).fetch_columns().await.unwrap();
        assert_eq!(columns, reference_columns());
    }

    #[tokio::test]
    async fn test_failure_message() {
        let err = instant(0.01).fetch_columns().await.unwrap_err();
        assert_eq!(err, FetchError::Api);
        assert_eq!(err.to_string(), "API Error: Failed to fetch columns");
    }

    #[tokio::test]
    async fn test_threshold_boundary() {
        // A draw equal to the failure probability succeeds.
        assert!(instant(0.05).fetch_columns().await.is_ok());
        assert!(instant(0.049_999).fetch_columns().await.is_err());
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let catalog = Catalog::new([Column::new("x", "X", "text")]);
        let service = instant(0.9).with_catalog(catalog);
        let columns = service.fetch_columns().await.unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].id, "x");
    }

    #[tokio::test]
    async fn test_never_and_always_fail() {
        let never = ColumnService::new(FetchConfig::new().with_delay(Duration::ZERO).never_fail())
            .with_source(FixedDraw(0.0));
        assert!(never.fetch_columns().await.is_ok());

        let always = ColumnService::new(FetchConfig::new().with_delay(Duration::ZERO).always_fail())
            .with_source(FixedDraw(0.999));
        assert!(always.fetch_columns().await.is_err());
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", ColumnService::default());
        assert!(debug.contains("ColumnService"));
        assert!(debug.contains("columns: 20"));
    }
}
