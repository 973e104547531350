//! Shared HTTP request handling
//!
//! Sends a prepared `RequestBuilder`, logs the exchange, and turns transport
//! failures and non-200 answers into [`MetricsError`]s. Providers build their
//! own requests and decide how to parse the returned body.

use std::error::Error;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::MetricsError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a 200 response
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name, used for logs
    /// * `url` - request URL, used for logs
    ///
    /// # Returns
    /// * `Ok(response_text)` - full body of an HTTP 200 response
    /// * `Err(MetricsError::NetworkError | Timeout)` - the request did not complete
    /// * `Err(MetricsError::UnexpectedStatus)` - any status other than 200
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, MetricsError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(&e, provider_name, None))?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {status}");

        if status != StatusCode::OK {
            // Body is kept only as a diagnostic excerpt.
            let raw_message = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .map(|body| truncate_for_log(&body));
            log::warn!("[{provider_name}] Unexpected HTTP status {status}");
            return Err(MetricsError::UnexpectedStatus {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                raw_message,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            transport_error(&e, provider_name, Some("Failed to read response body"))
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(MetricsError::ParseError)` - malformed JSON or unexpected shape
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, MetricsError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            MetricsError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Maps a reqwest failure, keeping the whole `source()` chain in `detail`.
fn transport_error(e: &reqwest::Error, provider_name: &str, prefix: Option<&str>) -> MetricsError {
    let chain = error_chain(e);
    let detail = match prefix {
        Some(prefix) => format!("{prefix}: {chain}"),
        None => chain,
    };

    if e.is_timeout() {
        MetricsError::Timeout {
            provider: provider_name.to_string(),
            detail,
        }
    } else {
        MetricsError::NetworkError {
            provider: provider_name.to_string(),
            detail,
        }
    }
}

/// Joins an error and its sources with `": "`, skipping repeated messages.
fn error_chain(e: &dyn Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Option<&dyn Error> = Some(e);
    while let Some(err) = current {
        let message = err.to_string();
        if parts.last() != Some(&message) {
            parts.push(message);
        }
        current = err.source();
    }
    parts.join(": ")
}
