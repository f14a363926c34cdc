//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the application expects from remote services.
//! They contain no transport details and use only core-owned types.

pub mod policy_server;

pub use policy_server::{
    HttpMethod, POLICY_SERVER_ENDPOINTS, PolicyServerPort, PsCall, PsClearPolicyListRequest,
    PsDelegatePolicyRequest, PsEmptyResponse, PsObservable, PsPortError, PsPortResult,
    ServiceEndpoint,
};
