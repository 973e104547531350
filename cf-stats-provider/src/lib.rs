//! # cf-stats-provider
//!
//! A small client for Cloudflare's GraphQL Analytics API that reports how
//! requests to a single zone were distributed across edge response status
//! codes over a time window.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static and cross-compiled binaries.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cf_stats_provider::{AnalyticsProvider, CloudflareProvider, FetchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CloudflareProvider::new("your-token".to_string())?;
//!
//!     let metrics = provider
//!         .fetch_metrics(&FetchOptions {
//!             zone_id: "023e105f4ecef8ad9ca31a8372d0c353".to_string(),
//!             start_date: "2025-12-17T15:00:00Z".to_string(),
//!             end_date: "2025-12-18T15:00:00Z".to_string(),
//!             limit: 10,
//!         })
//!         .await?;
//!
//!     for metric in &metrics {
//!         println!("{} -> {}", metric.status, metric.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, MetricsError>`](MetricsError):
//!
//! - [`MetricsError::NetworkError`] / [`MetricsError::Timeout`] — the request never completed
//! - [`MetricsError::UnexpectedStatus`] — the API answered with something other than HTTP 200
//! - [`MetricsError::QueryError`] — the API rejected the GraphQL query
//! - [`MetricsError::ParseError`] — the response body did not match the expected shape
//!
//! Nothing is retried. A zone with no traffic in the window is not an error:
//! it yields an empty list.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{MetricsError, Result};

pub use traits::AnalyticsProvider;

pub use types::{FetchOptions, StatusMetric};

pub use providers::CloudflareProvider;
