//! Extension trait for `Future<Output = Outcome<T, E>>`.
//!
//! Provides every [`Outcome`] combinator and unwrap operation directly on
//! futures, mirroring the synchronous API method for method.

use core::fmt::Debug;
use core::future::Future;

use crate::types::Outcome;

use super::chain::Chain;
use super::lift::Lift;

/// Lifts [`Outcome`] operations over futures that resolve to an outcome.
///
/// Each method returns a new future that first awaits `self`, then applies
/// the synchronous operation of the same name. Chaining `n` methods yields
/// `n` ordered resolution steps: no step starts before the previous one has
/// resolved.
///
/// The `*_async` variants take a transformer that itself returns a future;
/// that future is awaited in place, so the chain stays flat.
///
/// If another extension trait with a `map` method (such as
/// `futures::FutureExt`) is in scope, call through this trait explicitly.
///
/// # Design Principles
///
/// - **Short-circuit**: transformers for the inactive track are never called
/// - **No new failure modes**: a panic or cancellation of the underlying future
///   propagates as-is and never becomes a domain `Err`
/// - **Familiar syntax**: same method names as the synchronous counterparts
///
/// # Examples
///
/// ```rust
/// use rail_result::prelude_async::*;
///
/// #[derive(Debug)]
/// struct ApiError;
///
/// async fn fetch_name(id: u32) -> Outcome<String, ApiError> {
///     if id == 1 { Outcome::ok("gala".to_string()) } else { Outcome::err(ApiError) }
/// }
///
/// async fn name_len(id: u32) -> usize {
///     fetch_name(id)
///         .map(|name| name.len())
///         .unwrap_or_default()
///         .await
/// }
/// ```
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Lifts [`Outcome::map`].
    fn map<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.map(f))
    }

    /// Lifts [`Outcome::map_err`].
    fn map_err<G, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Outcome<T, G>>
    where
        F: FnOnce(E) -> G,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.map_err(f))
    }

    /// Lifts [`Outcome::and_then`].
    fn and_then<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.and_then(f))
    }

    /// Lifts [`Outcome::and_then_with`].
    fn and_then_with<U, F>(
        self,
        f: F,
    ) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Outcome<U, E>>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.and_then_with(f))
    }

    /// Lifts [`Outcome::and`].
    fn and<U>(
        self,
        other: Outcome<U, E>,
    ) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Outcome<U, E>> {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.and(other))
    }

    /// Awaits `self`, then lifts [`Outcome::map_async`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::prelude_async::*;
    ///
    /// async fn convert(n: u32) -> String {
    ///     n.to_string()
    /// }
    ///
    /// async fn example() -> Outcome<String, ()> {
    ///     Outcome::<u32, ()>::ok(5).ready().map_async(convert).await
    /// }
    /// ```
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Chain::new(self, move |outcome: Outcome<T, E>| outcome.map_async(f))
    }

    /// Awaits `self`, then lifts [`Outcome::map_err_async`].
    fn map_err_async<G, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        Chain::new(self, move |outcome: Outcome<T, E>| outcome.map_err_async(f))
    }

    /// Awaits `self`, then lifts [`Outcome::and_then_async`].
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        Chain::new(self, move |outcome: Outcome<T, E>| outcome.and_then_async(f))
    }

    /// Awaits `self`, then lifts [`Outcome::and_then_with_async`].
    fn and_then_with_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        Chain::new(self, move |outcome: Outcome<T, E>| outcome.and_then_with_async(f))
    }

    /// Lifts [`Outcome::unwrap`].
    ///
    /// # Panics
    ///
    /// The returned future panics when it resolves to `Err`.
    fn unwrap(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> T>
    where
        E: Debug,
    {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap())
    }

    /// Lifts [`Outcome::unwrap_err`].
    ///
    /// # Panics
    ///
    /// The returned future panics when it resolves to `Ok`.
    fn unwrap_err(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> E>
    where
        T: Debug,
    {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap_err())
    }

    /// Lifts [`Outcome::expect`].
    ///
    /// # Panics
    ///
    /// The returned future panics with `msg` when it resolves to `Err`.
    fn expect<'a>(self, msg: &'a str) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> T + 'a>
    where
        E: Debug,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.expect(msg))
    }

    /// Lifts [`Outcome::expect_err`].
    ///
    /// # Panics
    ///
    /// The returned future panics with `msg` when it resolves to `Ok`.
    fn expect_err<'a>(self, msg: &'a str) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> E + 'a>
    where
        T: Debug,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.expect_err(msg))
    }

    /// Lifts [`Outcome::unwrap_or`].
    fn unwrap_or(self, default: T) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> T> {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.unwrap_or(default))
    }

    /// Lifts [`Outcome::unwrap_or_else`].
    fn unwrap_or_else<F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> T>
    where
        F: FnOnce(E) -> T,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.unwrap_or_else(f))
    }

    /// Awaits `self`, then lifts [`Outcome::unwrap_or_else_async`].
    fn unwrap_or_else_async<F, Fut>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        Chain::new(self, move |outcome: Outcome<T, E>| outcome.unwrap_or_else_async(f))
    }

    /// Lifts [`Outcome::unwrap_or_default`].
    fn unwrap_or_default(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> T>
    where
        T: Default,
    {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap_or_default())
    }

    /// Lifts [`Outcome::unwrap_or_none`].
    fn unwrap_or_none(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Option<T>> {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap_or_none())
    }

    /// Lifts [`Outcome::unwrap_err_or`].
    fn unwrap_err_or(self, default: E) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> E> {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.unwrap_err_or(default))
    }

    /// Lifts [`Outcome::unwrap_err_or_else`].
    fn unwrap_err_or_else<F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> E>
    where
        F: FnOnce(T) -> E,
    {
        Lift::new(self, move |outcome: Outcome<T, E>| outcome.unwrap_err_or_else(f))
    }

    /// Lifts [`Outcome::unwrap_err_or_default`].
    fn unwrap_err_or_default(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> E>
    where
        E: Default,
    {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap_err_or_default())
    }

    /// Lifts [`Outcome::unwrap_err_or_none`].
    fn unwrap_err_or_none(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Option<E>> {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.unwrap_err_or_none())
    }

    /// Resolves to a standard `Result`, ready for `?` in an `async fn`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::prelude_async::*;
    ///
    /// async fn fetch() -> Outcome<u32, &'static str> {
    ///     Outcome::ok(41)
    /// }
    ///
    /// async fn example() -> Result<u32, &'static str> {
    ///     let id = fetch().into_result().await?;
    ///     Ok(id + 1)
    /// }
    /// ```
    fn into_result(self) -> Lift<Self, impl FnOnce(Outcome<T, E>) -> Result<T, E>> {
        Lift::new(self, |outcome: Outcome<T, E>| outcome.into_result())
    }
}

impl<Fut, T, E> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}
