//! Tracing integration for outcome futures.
//!
//! # Feature Flag
//!
//! Requires the `async` and `tracing` features:
//!
//! ```toml
//! [dependencies]
//! rail-result = { version = "0.1", features = ["async", "tracing"] }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::types::Outcome;

/// Extension trait that runs an outcome future inside a tracing span.
///
/// # Example
///
/// ```rust
/// use rail_result::async_ext::OutcomeSpanExt;
/// use rail_result::Outcome;
///
/// async fn fetch_user(id: u64) -> Outcome<String, &'static str> {
///     let span = tracing::info_span!("fetch_user", user_id = id);
///
///     async { Outcome::err("not found") }
///         .in_span(span)
///         .await
/// }
/// ```
pub trait OutcomeSpanExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Polls the future inside `span`.
    ///
    /// When the future resolves to `Err`, a `warn` event carrying the span's
    /// name and the error's `Debug` output is emitted inside the span. The
    /// outcome is returned unchanged.
    fn in_span(self, span: Span) -> SpanFuture<Self> {
        SpanFuture { inner: self, span }
    }

    /// Polls the future inside the span that is current at call time.
    fn in_current_span(self) -> SpanFuture<Self> {
        self.in_span(Span::current())
    }
}

impl<F, T, E> OutcomeSpanExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}

pin_project! {
    /// Future wrapper that polls inside a span and reports failures.
    ///
    /// Created by [`OutcomeSpanExt::in_span`] or [`OutcomeSpanExt::in_current_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T, E> Future for SpanFuture<F>
where
    F: Future<Output = Outcome<T, E>>,
    E: Debug,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(Outcome::Err(error)) => {
                tracing::warn!(span = span_name(&*this.span), error = ?error, "outcome future failed");
                Poll::Ready(Outcome::Err(error))
            },
            other => other,
        }
    }
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
