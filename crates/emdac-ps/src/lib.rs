#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPsClient is meant to be used through the PolicyServerPort trait,
// not its internal generic structure
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPsClient;

// Configuration
pub use config::PsClientConfig;

// Silence unused dev-dependency warnings (used by tests/)
#[cfg(test)]
use httpmock as _;
