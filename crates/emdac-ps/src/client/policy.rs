//! Request dispatch for policy server endpoints.

use std::future::Future;
use std::sync::Arc;

use emdac_core::ServiceEndpoint;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PsResult;
use crate::http::HttpBackend;
use crate::url::build_endpoint_url;

use super::PsClient;

impl<B: HttpBackend> PsClient<B> {
    /// Build the request for `endpoint` without sending it.
    ///
    /// The returned future owns everything it needs and does not borrow
    /// `self`; the request is issued when it is first polled.
    pub(crate) fn dispatch<T>(
        &self,
        endpoint: ServiceEndpoint,
        body: Value,
    ) -> impl Future<Output = PsResult<T>> + Send + use<B, T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let config = Arc::clone(&self.config);

        async move {
            let url = build_endpoint_url(&config.base_url, &endpoint)?;
            tracing::debug!(
                endpoint = endpoint.name,
                method = %endpoint.method,
                %url,
                "dispatching policy server request"
            );
            backend.send_json(endpoint.method, &url, &body).await
        }
    }
}
