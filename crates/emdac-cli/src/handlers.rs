//! Command handlers.
//!
//! Handlers talk to the server only through `PolicyServerPort`, print the
//! server's answer as JSON and turn `error: true` into a `CliError`.

use emdac_core::{
    POLICY_SERVER_ENDPOINTS, PolicyServerPort, PsClearPolicyListRequest, PsDelegatePolicyRequest,
    PsEmptyResponse,
};
use futures_util::StreamExt;
use serde_json::Value;

use crate::error::CliError;

/// Parse a `--body` argument.
fn parse_body(body: &str) -> Result<Value, CliError> {
    serde_json::from_str(body)
        .map_err(|e| CliError::Arguments(format!("--body is not valid JSON: {e}")))
}

/// Print the response and fail on a server-reported error.
fn report(response: PsEmptyResponse) -> Result<PsEmptyResponse, CliError> {
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!(error = %e, "could not render response"),
    }
    if response.is_error() {
        tracing::info!(reason = ?response.message(), "policy server reported an error");
    }
    response.ensure_ok().map_err(CliError::from)
}

pub async fn clear_policy_list(
    port: &dyn PolicyServerPort,
    body: &str,
) -> Result<PsEmptyResponse, CliError> {
    let request = PsClearPolicyListRequest::from_value(parse_body(body)?);
    let response = port.clear_policy_list(request).execute().await?;
    report(response)
}

pub async fn delegate_policy(
    port: &dyn PolicyServerPort,
    body: &str,
) -> Result<PsEmptyResponse, CliError> {
    let request = PsDelegatePolicyRequest::from_value(parse_body(body)?);
    let response = port
        .delegate_policy(request)
        .next()
        .await
        .ok_or(CliError::EmptyResponse)??;
    report(response)
}

/// One line per operation, e.g. `PUT /policy (clearPolicyList)`.
pub fn endpoints() -> Vec<String> {
    POLICY_SERVER_ENDPOINTS
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use emdac_core::{PsCall, PsObservable, PsPortError, ServiceEndpoint};
    use futures_util::stream;
    use serde_json::json;

    mockall::mock! {
        Port {}

        impl PolicyServerPort for Port {
            fn clear_policy_list(&self, request: PsClearPolicyListRequest) -> PsCall<PsEmptyResponse>;
            fn delegate_policy(&self, request: PsDelegatePolicyRequest) -> PsObservable<PsEmptyResponse>;
        }
    }

    fn ack(value: Value) -> PsEmptyResponse {
        serde_json::from_value(value).unwrap()
    }

    fn ready_call(value: Value) -> PsCall<PsEmptyResponse> {
        PsCall::new(ServiceEndpoint::CLEAR_POLICY_LIST, move || {
            let response = ack(value.clone());
            async move { Ok(response) }
        })
    }

    #[tokio::test]
    async fn test_clear_policy_list_forwards_body() {
        let mut port = MockPort::new();
        port.expect_clear_policy_list()
            .withf(|request| request.as_value() == &json!({"user_id": "u-1"}))
            .times(1)
            .returning(|_| ready_call(json!({"error": false})));

        let response = clear_policy_list(&port, r#"{"user_id": "u-1"}"#)
            .await
            .unwrap();
        assert!(!response.is_error());
    }

    #[tokio::test]
    async fn test_clear_policy_list_server_error_fails() {
        let mut port = MockPort::new();
        port.expect_clear_policy_list()
            .returning(|_| ready_call(json!({"error": true, "message": "policy conflict"})));

        let err = clear_policy_list(&port, "{}").await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("policy conflict"));
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_port() {
        let mut port = MockPort::new();
        port.expect_clear_policy_list().times(0);
        port.expect_delegate_policy().times(0);

        let err = clear_policy_list(&port, "{oops").await.unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));

        let err = delegate_policy(&port, "").await.unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[tokio::test]
    async fn test_delegate_policy_takes_single_value() {
        let mut port = MockPort::new();
        port.expect_delegate_policy()
            .withf(|request| request.as_value() == &json!({"to": "u-2"}))
            .returning(|_| stream::once(async { Ok(ack(json!({"error": false}))) }).boxed());

        let response = delegate_policy(&port, r#"{"to": "u-2"}"#).await.unwrap();
        assert!(!response.is_error());
    }

    #[tokio::test]
    async fn test_delegate_policy_transport_error() {
        let mut port = MockPort::new();
        port.expect_delegate_policy().returning(|_| {
            stream::once(async {
                Err(PsPortError::Transport {
                    status: None,
                    message: "connection refused".to_string(),
                })
            })
            .boxed()
        });

        let err = delegate_policy(&port, "{}").await.unwrap_err();
        assert_eq!(err.exit_code(), 69);
    }

    #[tokio::test]
    async fn test_delegate_policy_empty_stream() {
        let mut port = MockPort::new();
        port.expect_delegate_policy()
            .returning(|_| stream::empty().boxed());

        let err = delegate_policy(&port, "{}").await.unwrap_err();
        assert!(matches!(err, CliError::EmptyResponse));
    }

    #[test]
    fn test_endpoints_listing() {
        assert_eq!(
            endpoints(),
            vec![
                "PUT /policy (clearPolicyList)".to_string(),
                "PUT /policy (delegatePolicy)".to_string(),
            ]
        );
    }
}
