//! Port trait implementation for `PsClient`.
//!
//! This module implements the core-owned `PolicyServerPort` trait for
//! `PsClient`, mapping internal errors to `PsPortError`.

use emdac_core::{
    PolicyServerPort, PsCall, PsClearPolicyListRequest, PsDelegatePolicyRequest, PsEmptyResponse,
    PsObservable, PsPortError, ServiceEndpoint,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::PsClient;
use crate::error::PsError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PsError` to core `PsPortError`.
pub(crate) fn map_error(err: PsError) -> PsPortError {
    match err {
        err @ PsError::ApiRequestFailed { status, .. } => PsPortError::Transport {
            status: Some(status),
            message: err.to_string(),
        },
        PsError::Network(e) => PsPortError::Transport {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        },
        PsError::InvalidResponse { message } => PsPortError::Deserialization { message },
        PsError::JsonParse(e) => PsPortError::Deserialization {
            message: e.to_string(),
        },
        err @ (PsError::ClientBuild(_)
        | PsError::InvalidUrl(_)
        | PsError::UnsupportedScheme { .. }) => PsPortError::Configuration {
            message: err.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

impl<B: HttpBackend> PsClient<B> {
    /// Wrap `endpoint` in a deferred call. Each execution re-sends `body`.
    fn deferred<T>(&self, endpoint: ServiceEndpoint, body: Value) -> PsCall<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        PsCall::new(endpoint, move || {
            let request = client.dispatch::<T>(endpoint, body.clone());
            async move { request.await.map_err(map_error) }
        })
    }
}

impl<B: HttpBackend> PolicyServerPort for PsClient<B> {
    fn clear_policy_list(&self, request: PsClearPolicyListRequest) -> PsCall<PsEmptyResponse> {
        self.deferred(ServiceEndpoint::CLEAR_POLICY_LIST, request.into_value())
    }

    fn delegate_policy(&self, request: PsDelegatePolicyRequest) -> PsObservable<PsEmptyResponse> {
        self.deferred(ServiceEndpoint::DELEGATE_POLICY, request.into_value())
            .into_observable()
    }
}
