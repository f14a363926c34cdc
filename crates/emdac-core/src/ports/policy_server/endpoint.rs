//! Static endpoint descriptors for the policy server contract.

use std::fmt;

/// HTTP verbs used by service contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remote operation: its name, verb and path.
///
/// Paths starting with `/` are absolute and resolve against the host root of
/// the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
}

impl ServiceEndpoint {
    /// `PUT /policy` carrying a [`PsClearPolicyListRequest`](super::PsClearPolicyListRequest).
    pub const CLEAR_POLICY_LIST: Self = Self::put("clearPolicyList", "/policy");

    /// `PUT /policy` carrying a [`PsDelegatePolicyRequest`](super::PsDelegatePolicyRequest).
    pub const DELEGATE_POLICY: Self = Self::put("delegatePolicy", "/policy");

    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Put,
            path,
        }
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.name)
    }
}

/// Every operation exposed by [`PolicyServerPort`](super::PolicyServerPort).
pub const POLICY_SERVER_ENDPOINTS: &[ServiceEndpoint] = &[
    ServiceEndpoint::CLEAR_POLICY_LIST,
    ServiceEndpoint::DELEGATE_POLICY,
];
