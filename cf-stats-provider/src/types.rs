//! Public request/response types.

use serde::Serialize;

/// Parameters for a single status-distribution query.
///
/// Values are passed to the API as-is. Zone tags and timestamps are not
/// validated locally; the API rejects malformed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Cloudflare zone tag.
    pub zone_id: String,
    /// Inclusive lower bound, ISO-8601 UTC (e.g. `2025-12-17T15:00:00Z`).
    pub start_date: String,
    /// Inclusive upper bound, ISO-8601 UTC.
    pub end_date: String,
    /// Maximum number of groups requested.
    pub limit: u32,
}

/// Number of requests answered with one edge response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMetric {
    pub status: u16,
    pub count: u64,
}
