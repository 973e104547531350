//! Cloudflare GraphQL 类型定义

use serde::{Deserialize, Serialize};

/// GraphQL 请求体
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: StatusGroupsVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusGroupsVariables<'a> {
    pub zone_tag: &'a str,
    pub limit: u32,
    pub start: &'a str,
    pub end: &'a str,
}

/// GraphQL 通用响应
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusGroupsData {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub zones: Vec<Zone>,
}

#[derive(Debug, Deserialize)]
pub struct Zone {
    #[serde(rename = "httpRequestsAdaptiveGroups")]
    pub http_requests_adaptive_groups: Vec<StatusGroup>,
}

/// One `httpRequestsAdaptiveGroups` row
#[derive(Debug, Deserialize)]
pub struct StatusGroup {
    pub count: u64,
    pub dimensions: StatusDimensions,
}

#[derive(Debug, Deserialize)]
pub struct StatusDimensions {
    #[serde(rename = "edgeResponseStatus")]
    pub edge_response_status: u16,
}
