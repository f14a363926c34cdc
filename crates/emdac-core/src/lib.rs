//! Core types for the EMDAC policy-server client.
//!
//! This crate owns the wire DTOs and the [`PolicyServerPort`] contract.
//! The HTTP implementation lives in `emdac-ps`; nothing here performs I/O.
#![deny(unused_crate_dependencies)]

pub mod models;
pub mod ports;
mod wire;

// Re-export commonly used types for convenience
pub use models::{BalanceRequest, GetUserIdResponse};
pub use ports::{
    HttpMethod, POLICY_SERVER_ENDPOINTS, PolicyServerPort, PsCall, PsClearPolicyListRequest,
    PsDelegatePolicyRequest, PsEmptyResponse, PsObservable, PsPortError, PsPortResult,
    ServiceEndpoint,
};
