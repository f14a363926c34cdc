//! Policy server port trait.

use super::call::{PsCall, PsObservable};
use super::types::{PsClearPolicyListRequest, PsDelegatePolicyRequest, PsEmptyResponse};

/// Port trait for policy server operations.
///
/// Both operations are `PUT /policy`; the server tells them apart by the
/// body. The implementation lives in `emdac-ps`.
///
/// # Design
///
/// - Returns lazy values: no request is sent when a method is called
/// - Uses core-owned DTOs and [`PsPortError`](super::PsPortError) only
/// - Holds no per-call state
pub trait PolicyServerPort: Send + Sync {
    /// Clear the user's policy list.
    ///
    /// The returned call is deferred; run it with
    /// [`PsCall::execute`] or [`PsCall::enqueue`].
    fn clear_policy_list(&self, request: PsClearPolicyListRequest) -> PsCall<PsEmptyResponse>;

    /// Delegate a policy to another user.
    ///
    /// The returned stream is cold and yields a single result.
    fn delegate_policy(&self, request: PsDelegatePolicyRequest) -> PsObservable<PsEmptyResponse>;
}
