//! Future running an asynchronous continuation after its input resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// Sequential continuation: awaits `first`, hands its output to `step`,
    /// then awaits the future `step` returned.
    ///
    /// The continuation is never started before `first` resolves, and its
    /// future is awaited in place, so a chain of `Chain`s resolves to a plain
    /// value rather than a future of a future.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `Chain` drops whichever stage is in flight. Nothing is
    /// retried or resumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::async_ext::Chain;
    /// use rail_result::Outcome;
    ///
    /// async fn lookup(id: u32) -> Outcome<String, u16> {
    ///     Outcome::ok(format!("resource-{id}"))
    /// }
    ///
    /// async fn example() -> Outcome<String, u16> {
    ///     let id = async { Outcome::<u32, u16>::ok(7) };
    ///     Chain::new(id, |o: Outcome<u32, u16>| o.and_then_async(lookup)).await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Chain<Fut, F, Next> {
        #[pin]
        first: Fut,
        step: Option<F>,
        #[pin]
        second: Option<Next>,
    }
}

impl<Fut, F, Next> Chain<Fut, F, Next> {
    /// Creates a new `Chain` from the input future and the continuation.
    #[inline]
    pub fn new(first: Fut, step: F) -> Self {
        Self { first, step: Some(step), second: None }
    }
}

impl<Fut, F, Next> Future for Chain<Fut, F, Next>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> Next,
    Next: Future,
{
    type Output = Next::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if this.second.is_none() {
            assert!(this.step.is_some(), "Chain polled after completion; this is a bug");
            let output = ready!(this.first.poll(cx));
            if let Some(step) = this.step.take() {
                this.second.set(Some(step(output)));
            }
        }

        let Some(next) = this.second.as_mut().as_pin_mut() else {
            unreachable!("Chain continuation missing after first stage resolved")
        };
        let output = ready!(next.poll(cx));
        this.second.set(None);
        Poll::Ready(output)
    }
}

impl<Fut, F, Next> FusedFuture for Chain<Fut, F, Next>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> Next,
    Next: Future,
{
    fn is_terminated(&self) -> bool {
        self.step.is_none() && self.second.is_none()
    }
}
