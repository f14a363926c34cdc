//! URL construction for policy server endpoints.

use emdac_core::ServiceEndpoint;
use url::Url;

use crate::error::PsResult;

/// Resolve an endpoint path against the configured base URL.
///
/// Absolute endpoint paths replace any path on the base, so
/// `http://host/api/` + `/policy` gives `http://host/policy`.
pub fn build_endpoint_url(base_url: &Url, endpoint: &ServiceEndpoint) -> PsResult<Url> {
    Ok(base_url.join(endpoint.path)?)
}
