//! Policy server client.
//!
//! `PsClient` is generic over an HTTP backend so tests can inject a fake.

mod policy;

use std::sync::Arc;

use crate::config::{PsClientConfig, PsConfig};
use crate::error::PsResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::port::map_error;
use emdac_core::PsPortResult;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default policy server client using the reqwest HTTP backend.
pub type DefaultPsClient = PsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the policy server API.
///
/// Use `DefaultPsClient` in production code. The backend is shared behind an
/// `Arc` so deferred calls can outlive the borrow of the client.
pub struct PsClient<B: HttpBackend> {
    pub(crate) backend: Arc<B>,
    pub(crate) config: Arc<PsConfig>,
}

impl DefaultPsClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with a configuration error on an invalid base URL or when the
    /// HTTP client cannot be built.
    pub fn new(config: &PsClientConfig) -> PsPortResult<Self> {
        Self::try_new(config).map_err(map_error)
    }

    fn try_new(config: &PsClientConfig) -> PsResult<Self> {
        let internal_config = PsConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend: Arc::new(backend),
            config: Arc::new(internal_config),
        })
    }
}

impl<B: HttpBackend> PsClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: PsConfig, backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
        }
    }
}

impl<B: HttpBackend> Clone for PsClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: Arc::clone(&self.config),
        }
    }
}
