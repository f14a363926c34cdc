//! HTTP backend abstraction for the policy server API.
//!
//! The client is generic over [`HttpBackend`] so tests can swap in a fake.
//! The production backend uses reqwest and sends every request exactly once.

use async_trait::async_trait;
use emdac_core::HttpMethod;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::PsConfig;
use crate::error::{PsError, PsResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON bodies.
///
/// This is an implementation detail - external code should use the
/// `PolicyServerPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync + 'static {
    /// Send `body` as JSON and deserialize the 2xx response body.
    async fn send_json<T: DeserializeOwned + Send>(
        &self,
        method: HttpMethod,
        url: &Url,
        body: &Value,
    ) -> PsResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Non-2xx answers become [`PsError::ApiRequestFailed`]; bodies are decoded
/// with `serde_json` so decode failures stay distinct from transport ones.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PsConfig) -> PsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(PsError::ClientBuild)?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with optional authentication.
    fn build_request(&self, method: HttpMethod, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.request(to_reqwest_method(method), url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }
}

const fn is_bodiless_success(status: reqwest::StatusCode) -> bool {
    matches!(
        status,
        reqwest::StatusCode::NO_CONTENT | reqwest::StatusCode::RESET_CONTENT
    )
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send_json<T: DeserializeOwned + Send>(
        &self,
        method: HttpMethod,
        url: &Url,
        body: &Value,
    ) -> PsResult<T> {
        let response = self.build_request(method, url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                "policy server rejected request"
            );
            return Err(PsError::ApiRequestFailed {
                method: method.as_str(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() && is_bodiless_success(status) {
            // 204/205 carry no body by definition; decode as an empty object.
            return Ok(serde_json::from_slice(b"{}")?);
        }
        if bytes.is_empty() {
            tracing::warn!(%url, status = status.as_u16(), "empty policy server response");
            return Err(PsError::InvalidResponse {
                message: format!("empty body with status {status}"),
            });
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%url, error = %e, "undecodable policy server response");
            PsError::JsonParse(e)
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(token: Option<&str>) -> PsConfig {
        PsConfig {
            base_url: Url::parse("http://ps.local").unwrap(),
            user_agent: "test-agent".to_string(),
            timeout: std::time::Duration::from_secs(5),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&test_config(None)).unwrap();
        assert!(backend.auth_token.is_none());
    }

    #[test]
    fn test_reqwest_backend_with_token() {
        let backend = ReqwestBackend::new(&test_config(Some("test_token"))).unwrap();
        assert_eq!(backend.auth_token, Some("test_token".to_string()));

        let url = Url::parse("http://ps.local/policy").unwrap();
        let request = backend.build_request(HttpMethod::Put, &url).build().unwrap();
        assert_eq!(*request.method(), reqwest::Method::PUT);
        assert_eq!(
            request.headers()["authorization"].to_str().unwrap(),
            "Bearer test_token"
        );
    }

    #[test]
    fn test_bodiless_success_statuses() {
        assert!(is_bodiless_success(reqwest::StatusCode::NO_CONTENT));
        assert!(is_bodiless_success(reqwest::StatusCode::RESET_CONTENT));
        assert!(!is_bodiless_success(reqwest::StatusCode::OK));
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(to_reqwest_method(HttpMethod::Get), reqwest::Method::GET);
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use emdac_core::PsEmptyResponse;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_records_and_answers() {
            let backend = FakeBackend::ok();
            let url = Url::parse("http://ps.local/policy").unwrap();

            let response: PsEmptyResponse = backend
                .send_json(HttpMethod::Put, &url, &json!({"a": 1}))
                .await
                .unwrap();

            assert!(!response.is_error());
            assert_eq!(
                backend.requests(),
                vec![RecordedRequest {
                    method: HttpMethod::Put,
                    url: "http://ps.local/policy".to_string(),
                    body: json!({"a": 1}),
                }]
            );
        }

        #[tokio::test]
        async fn test_fake_backend_status() {
            let backend = FakeBackend::new(CannedResponse::Status(500));
            let url = Url::parse("http://ps.local/policy").unwrap();

            let result: PsResult<PsEmptyResponse> =
                backend.send_json(HttpMethod::Put, &url, &json!({})).await;
            assert!(matches!(
                result,
                Err(PsError::ApiRequestFailed { status: 500, .. })
            ));
        }
    }
}
