use thiserror::Error;

/// Errors raised by the distance-lookup client.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl DistanceError {
    /// The HTTP-style code to report to the quote consumer.
    ///
    /// Upstream statuses pass through unchanged; anything without a status
    /// (connect failures, timeouts, undecodable bodies) counts as a service
    /// failure and reports 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            DistanceError::Http(e) => e.status().map_or(500, |s| s.as_u16()),
            DistanceError::UnexpectedStatus { status, .. } => *status,
            DistanceError::Deserialize { .. } | DistanceError::InvalidBaseUrl { .. } => 500,
        }
    }
}
