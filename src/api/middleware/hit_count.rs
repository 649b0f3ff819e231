//! Hit-counting middleware for content routes.

use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::domain::HitCounter;

/// Metric name under which hits are also forwarded to the `metrics` facade.
pub const HITS_METRIC: &str = "chirpy_fileserver_hits_total";

/// Layer that counts every request passing through the wrapped service.
///
/// Applied per route at registration time; routes without the layer are
/// not counted.
///
/// # Example
///
/// ```rust,ignore
/// let hits = HitCountLayer::new(state.hit_counter.clone());
/// let app = Router::new().nest_service("/app", hits.layer(ServeDir::new("static")));
/// ```
#[derive(Clone)]
pub struct HitCountLayer {
    counter: Arc<HitCounter>,
}

impl HitCountLayer {
    pub fn new(counter: Arc<HitCounter>) -> Self {
        Self { counter }
    }
}

impl<S> Layer<S> for HitCountLayer {
    type Service = HitCount<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HitCount {
            inner,
            counter: self.counter.clone(),
        }
    }
}

/// Service produced by [`HitCountLayer`].
///
/// Increments the counter, then hands the request to `inner` and returns
/// its future untouched. Works for any request type.
#[derive(Clone)]
pub struct HitCount<S> {
    inner: S,
    counter: Arc<HitCounter>,
}

impl<S, Req> Service<Req> for HitCount<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        self.counter.increment();
        metrics::counter!(HITS_METRIC).increment(1);
        self.inner.call(req)
    }
}
