//! Cloudflare `AnalyticsProvider` 实现

use async_trait::async_trait;

use crate::error::{MetricsError, Result};
use crate::traits::AnalyticsProvider;
use crate::types::{FetchOptions, StatusMetric};

use super::query::status_groups_request;
use super::{CloudflareProvider, GraphQlResponse, PROVIDER_NAME, StatusGroupsData};

impl CloudflareProvider {
    /// Flattens the first zone's groups into metrics, keeping API order.
    pub(crate) fn response_to_metrics(
        response: GraphQlResponse<StatusGroupsData>,
    ) -> Result<Vec<StatusMetric>> {
        if let Some(error) = response.errors.and_then(|errors| errors.into_iter().next()) {
            log::error!("[{PROVIDER_NAME}] GraphQL error: {}", error.message);
            return Err(MetricsError::QueryError {
                provider: PROVIDER_NAME.to_string(),
                raw_message: error.message,
            });
        }

        let data = response.data.ok_or_else(|| MetricsError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: "响应中缺少 data 字段".to_string(),
        })?;

        // Single-zone filter: at most one entry.
        let Some(zone) = data.viewer.zones.into_iter().next() else {
            log::debug!("[{PROVIDER_NAME}] No zone data in window");
            return Ok(Vec::new());
        };

        Ok(zone
            .http_requests_adaptive_groups
            .into_iter()
            .map(|group| StatusMetric {
                status: group.dimensions.edge_response_status,
                count: group.count,
            })
            .collect())
    }
}

#[async_trait]
impl AnalyticsProvider for CloudflareProvider {
    async fn fetch_metrics(&self, options: &FetchOptions) -> Result<Vec<StatusMetric>> {
        let request = status_groups_request(options);
        let response: GraphQlResponse<StatusGroupsData> = self.post_graphql(&request).await?;
        let metrics = Self::response_to_metrics(response)?;

        log::debug!(
            "[{PROVIDER_NAME}] {} status groups for zone {}",
            metrics.len(),
            options.zone_id
        );
        Ok(metrics)
    }
}
