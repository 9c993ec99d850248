//! Error types for Dog API requests.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while fetching from the Dog API.
///
/// The display string is what the state slices store as their `error`
/// message, so it carries the underlying error's message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or connection failure.
    #[error("{source}")]
    Network {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    /// Response body was not the expected JSON.
    #[error("Invalid response from {endpoint} (HTTP {status}): {source}")]
    Parse {
        endpoint: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn network(endpoint: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ApiError::Network {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// Endpoint path the failed request was sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Network { endpoint, .. } | ApiError::Parse { endpoint, .. } => endpoint,
        }
    }

    /// Short error kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network",
            ApiError::Parse { .. } => "parse",
        }
    }
}
