use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FetchOptions, StatusMetric};

/// Source of per-zone status distributions.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Fetches status counts for one zone over the requested window.
    ///
    /// Groups are returned in the order the API ordered them (count
    /// descending). A zone with no data yields an empty list.
    async fn fetch_metrics(&self, options: &FetchOptions) -> Result<Vec<StatusMetric>>;
}
