//! Policy server port definitions.
//!
//! This module defines the contract, DTOs and invocation types for the
//! policy server. The actual HTTP implementation lives in `emdac-ps`.

mod call;
mod client;
mod endpoint;
mod error;
mod types;

pub use call::{PsCall, PsObservable};
pub use client::PolicyServerPort;
pub use endpoint::{HttpMethod, POLICY_SERVER_ENDPOINTS, ServiceEndpoint};
pub use error::{PsPortError, PsPortResult};
pub use types::{PsClearPolicyListRequest, PsDelegatePolicyRequest, PsEmptyResponse};
