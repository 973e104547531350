//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{MetricsError, Result};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Identifies this tool to upstream APIs.
pub const USER_AGENT: &str = concat!("cf-stats-exporter/", env!("CARGO_PKG_VERSION"));

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| MetricsError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_tool() {
        assert!(USER_AGENT.starts_with("cf-stats-exporter/"));
        assert!(USER_AGENT.len() > "cf-stats-exporter/".len());
    }

    #[test]
    fn client_builds() {
        assert!(create_http_client("test").is_ok());
    }
}
