//! Cloudflare GraphQL Analytics Provider

mod http;
mod provider;
mod query;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{GraphQlRequest, GraphQlResponse, StatusGroupsData};

pub(crate) const CF_GRAPHQL_ENDPOINT: &str = "https://api.cloudflare.com/client/v4/graphql";
pub(crate) const PROVIDER_NAME: &str = "cloudflare";

/// Cloudflare Analytics Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) endpoint: String,
}

impl CloudflareProvider {
    pub fn new(api_token: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME)?,
            api_token,
            endpoint: CF_GRAPHQL_ENDPOINT.to_string(),
        })
    }

    /// Points the provider at a different GraphQL endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
