//! CLI-specific error types and exit code mapping.

use emdac_core::PsPortError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (missing base URL, malformed body).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Error from the policy server port.
    #[error(transparent)]
    Port(#[from] PsPortError),

    /// The response stream ended without a value.
    #[error("Policy server stream completed without a response")]
    EmptyResponse,
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits; a server-side
    /// `error: true` answer exits with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Port(PsPortError::Application { .. }) => 1,
            Self::Port(PsPortError::Transport { .. }) => 69, // EX_UNAVAILABLE
            Self::Port(PsPortError::Deserialization { .. }) => 65, // EX_DATAERR
            Self::Port(PsPortError::Configuration { .. }) => 78, // EX_CONFIG
            Self::EmptyResponse => 70,                       // EX_SOFTWARE
        }
    }
}
