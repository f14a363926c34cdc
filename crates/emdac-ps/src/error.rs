//! Internal error types for policy server operations.
//!
//! These errors are internal to `emdac-ps` and are mapped to core port errors
//! at the boundary.

use thiserror::Error;

/// Result type alias for policy server operations.
pub type PsResult<T> = Result<T, PsError>;

/// Errors related to policy server API operations.
#[derive(Debug, Error)]
pub enum PsError {
    /// The server answered with a non-2xx status.
    #[error("{method} {url} failed with status {status}")]
    ApiRequestFailed {
        /// HTTP verb of the request
        method: &'static str,
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from policy server: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL with a scheme other than http/https.
    #[error("Unsupported URL scheme '{scheme}'")]
    UnsupportedScheme {
        /// The rejected scheme
        scheme: String,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
