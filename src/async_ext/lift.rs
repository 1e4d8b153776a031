//! Future applying a synchronous step once its input resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Future that awaits `future` and feeds its output to a synchronous step.
    ///
    /// This is the building block for lifting [`Outcome`](crate::Outcome)
    /// combinators and unwrap operations over futures. The step runs exactly
    /// once, after the inner future resolves, and never before.
    ///
    /// A panic inside the inner future or the step unwinds through `poll`
    /// unchanged; it is never turned into a domain error.
    ///
    /// # Cancel Safety
    ///
    /// `Lift` is cancel-safe if the inner future is cancel-safe. Dropping it
    /// drops the inner future and the unused step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::async_ext::Lift;
    /// use rail_result::Outcome;
    ///
    /// async fn example() -> Outcome<usize, u16> {
    ///     let fetch = async { Outcome::<String, u16>::ok("gala".to_string()) };
    ///     Lift::new(fetch, |o: Outcome<String, u16>| o.map(|name| name.len())).await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Lift<Fut, F> {
        #[pin]
        future: Fut,
        step: Option<F>,
    }
}

impl<Fut, F> Lift<Fut, F> {
    /// Creates a new `Lift` from the input future and the step to apply.
    #[inline]
    pub fn new(future: Fut, step: F) -> Self {
        Self { future, step: Some(step) }
    }
}

impl<Fut, F, R> Future for Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let output = ready!(this.future.poll(cx));
        let step = this
            .step
            .take()
            .expect("Lift polled after completion; this is a bug");
        Poll::Ready(step(output))
    }
}

impl<Fut, F, R> FusedFuture for Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        self.step.is_none()
    }
}
