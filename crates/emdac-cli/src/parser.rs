//! Main CLI parser and top-level argument handling.
//!
//! Connection settings are global options; each can also come from the
//! environment (or a `.env` file loaded before parsing).

use std::time::Duration;

use clap::Parser;
use emdac_ps::PsClientConfig;

use crate::commands::Commands;

/// Command-line interface for the EMDAC policy server.
#[derive(Parser)]
#[command(name = "emdac-ps")]
#[command(about = "Manage access policies on an EMDAC policy server")]
#[command(version)]
pub struct Cli {
    /// Base URL of the policy server
    #[arg(long = "base-url", env = "EMDAC_PS_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "EMDAC_PS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "EMDAC_PS_TIMEOUT_SECS",
        default_value_t = 30,
        global = true
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Client configuration, or `None` when no base URL was given.
    pub fn client_config(&self) -> Option<PsClientConfig> {
        let base_url = self.base_url.as_ref()?;
        Some(
            PsClientConfig::new(base_url)
                .with_timeout(Duration::from_secs(self.timeout_secs))
                .with_optional_token(self.token.clone()),
        )
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
