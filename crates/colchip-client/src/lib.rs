//! colchip Client - Mock asynchronous column fetch service.
//!
//! The service hands out the column catalog after a fixed delay and fails a
//! configurable fraction of calls, so callers can exercise their async and
//! error-handling paths before a real backend exists.
//!
//! # Quick Start
//!
//! ```ignore
//! use colchip_client::fetch_columns;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let columns = fetch_columns().await?;
//!     println!("Fetched {} columns", columns.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod random;
pub mod service;

pub use config::FetchConfig;
pub use error::FetchError;
pub use random::{DrawSource, FixedDraw, SeededSource, ThreadRngSource};
pub use service::{fetch_columns, ColumnService};

/// Re-export catalog types.
pub use colchip_core as core;
