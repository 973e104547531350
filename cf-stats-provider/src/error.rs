use serde::Serialize;

/// Error type for analytics queries.
///
/// Each variant carries the `provider` that produced it plus variant-specific
/// context. All variants are serializable for structured error reporting.
///
/// # Transport Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`UnexpectedStatus`](Self::UnexpectedStatus) mean no usable response came
/// back. See [`is_transport`](Self::is_transport).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum MetricsError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a status other than 200. The body is not parsed.
    UnexpectedStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Truncated response body, if one could be read.
        raw_message: Option<String>,
    },

    /// The GraphQL endpoint returned an `errors` array.
    QueryError {
        /// Provider that produced the error.
        provider: String,
        /// First error message reported by the API.
        raw_message: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl MetricsError {
    /// Whether the failure happened before a 200 response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::UnexpectedStatus { .. }
        )
    }
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::UnexpectedStatus {
                provider, status, ..
            } => {
                write!(f, "[{provider}] HTTP request failed with status {status}")
            }
            Self::QueryError {
                provider,
                raw_message,
            } => {
                write!(f, "[{provider}] Query rejected: {raw_message}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// Convenience type alias for `Result<T, MetricsError>`.
pub type Result<T> = std::result::Result<T, MetricsError>;
