//! Error types for policy server port operations.

use thiserror::Error;

/// Errors from policy server port operations.
///
/// These are the errors callers handle. Implementation-specific errors
/// (HTTP, JSON) are mapped to these at the port boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PsPortError {
    /// The call could not complete: network failure, timeout or a
    /// non-2xx status.
    #[error("Transport error: {message}")]
    Transport {
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// The response body did not match the declared shape.
    #[error("Could not decode response: {message}")]
    Deserialization {
        /// What failed to parse
        message: String,
    },

    /// The server answered with `error: true`.
    ///
    /// Only produced when the caller asks for it through
    /// [`PsEmptyResponse::ensure_ok`](super::PsEmptyResponse::ensure_ok).
    #[error("Policy server reported an error: {}", describe(.message.as_deref()))]
    Application {
        /// Message returned by the server, if any
        message: Option<String>,
    },

    /// The client is misconfigured (bad base URL, HTTP client setup).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl PsPortError {
    /// HTTP status carried by a transport error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn describe(message: Option<&str>) -> &str {
    message.unwrap_or("no message")
}

/// Result type alias for policy server port operations.
pub type PsPortResult<T> = Result<T, PsPortError>;
