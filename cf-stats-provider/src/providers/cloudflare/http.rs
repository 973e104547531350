//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{CloudflareProvider, GraphQlRequest, GraphQlResponse, PROVIDER_NAME};

impl CloudflareProvider {
    /// 执行 GraphQL POST 请求
    pub(crate) async fn post_graphql<T: DeserializeOwned>(
        &self,
        request: &GraphQlRequest<'_>,
    ) -> Result<GraphQlResponse<T>> {
        log::debug!("[{PROVIDER_NAME}] Variables: {:?}", request.variables);

        let builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(request);

        let response_text =
            HttpUtils::execute_request(builder, PROVIDER_NAME, "POST", &self.endpoint).await?;

        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }
}
