//! Invocation types returned by the policy server contract.
//!
//! Both are lazy: building one performs no I/O.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::task::JoinHandle;

use super::endpoint::ServiceEndpoint;
use super::error::PsPortResult;

/// Cold single-value stream: the request starts on first poll, then the
/// stream yields one `Ok` or one `Err` and ends.
pub type PsObservable<T> = BoxStream<'static, PsPortResult<T>>;

type CallFactory<T> = Arc<dyn Fn() -> BoxFuture<'static, PsPortResult<T>> + Send + Sync>;

/// A deferred call to a remote endpoint.
///
/// Nothing is sent until [`execute`](Self::execute) or
/// [`enqueue`](Self::enqueue) is invoked. A clone issues its own request.
/// Dropping the returned future (or aborting the join handle) cancels the
/// in-flight request.
pub struct PsCall<T> {
    endpoint: ServiceEndpoint,
    factory: CallFactory<T>,
}

impl<T: Send + 'static> PsCall<T> {
    /// Wrap a request factory; `factory` runs once per execution.
    pub fn new<F, Fut>(endpoint: ServiceEndpoint, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = PsPortResult<T>> + Send + 'static,
    {
        Self {
            endpoint,
            factory: Arc::new(move || factory().boxed()),
        }
    }

    /// The endpoint this call targets.
    pub const fn endpoint(&self) -> ServiceEndpoint {
        self.endpoint
    }

    /// Perform the request and wait for the decoded response.
    pub async fn execute(self) -> PsPortResult<T> {
        (self.factory)().await
    }

    /// Run the request on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn enqueue(self) -> JoinHandle<PsPortResult<T>> {
        tokio::spawn(self.execute())
    }

    /// Expose the call as a cold single-value stream.
    pub fn into_observable(self) -> PsObservable<T> {
        stream::once(self.execute()).boxed()
    }
}

impl<T> Clone for PsCall<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for PsCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PsCall")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::policy_server::PsPortError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_call(counter: &Arc<AtomicUsize>) -> PsCall<usize> {
        let counter = Arc::clone(counter);
        PsCall::new(ServiceEndpoint::CLEAR_POLICY_LIST, move || {
            let counter = Arc::clone(&counter);
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        })
    }

    #[test]
    fn test_execute_runs_only_when_awaited() {
        let counter = Arc::new(AtomicUsize::new(0));
        let call = counting_call(&counter);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        let pending = call.execute();
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        assert_eq!(tokio_test::block_on(pending), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clone_issues_independent_request() {
        let counter = Arc::new(AtomicUsize::new(0));
        let call = counting_call(&counter);
        let again = call.clone();

        assert_eq!(call.execute().await, Ok(1));
        assert_eq!(again.execute().await, Ok(2));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_enqueue_runs_on_runtime() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = counting_call(&counter).enqueue();

        assert_eq!(handle.await.unwrap(), Ok(1));
    }

    #[tokio::test]
    async fn test_observable_is_cold_and_single_valued() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut observable = counting_call(&counter).into_observable();
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        assert_eq!(observable.next().await, Some(Ok(1)));
        assert_eq!(observable.next().await, None);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_observable_emits_error_then_completes() {
        let call: PsCall<()> = PsCall::new(ServiceEndpoint::DELEGATE_POLICY, || async {
            Err(PsPortError::Transport {
                status: None,
                message: "connection refused".to_string(),
            })
        });
        let mut observable = call.into_observable();

        assert!(matches!(
            observable.next().await,
            Some(Err(PsPortError::Transport { status: None, .. }))
        ));
        assert!(observable.next().await.is_none());
    }

    #[test]
    fn test_endpoint_and_debug() {
        let call = counting_call(&Arc::new(AtomicUsize::new(0)));
        assert_eq!(call.endpoint(), ServiceEndpoint::CLEAR_POLICY_LIST);
        assert!(format!("{call:?}").contains("clearPolicyList"));
    }
}
