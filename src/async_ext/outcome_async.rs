//! Asynchronous transformers on an outcome that is already in hand.
//!
//! Each method awaits the transformer's future only when the matching track
//! is active; on the other track the transformer is neither called nor
//! awaited.

use core::future::{ready, Future, Ready};

use crate::types::Outcome;

impl<T, E> Outcome<T, E> {
    /// Wraps this outcome in an already-resolved future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::prelude_async::*;
    ///
    /// async fn example() -> Outcome<i32, &'static str> {
    ///     Outcome::<i32, &str>::ok(20).ready().map(|n| n + 1).await
    /// }
    /// ```
    #[inline]
    pub fn ready(self) -> Ready<Self> {
        ready(self)
    }

    /// Maps the success value with an asynchronous function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::Outcome;
    ///
    /// async fn price_of(item: u32) -> u64 {
    ///     u64::from(item) * 100
    /// }
    ///
    /// async fn example() -> Outcome<u64, &'static str> {
    ///     Outcome::ok(3).map_async(price_of).await
    /// }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value).await),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error value with an asynchronous function.
    pub async fn map_err_async<G, F, Fut>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error).await),
        }
    }

    /// Chains an asynchronous fallible step onto the success track.
    ///
    /// The step's future is awaited in place, so the result is a flat
    /// `Outcome<U, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_result::Outcome;
    ///
    /// async fn load_owner(id: u32) -> Outcome<String, &'static str> {
    ///     if id == 1 { Outcome::ok("root".to_string()) } else { Outcome::err("no owner") }
    /// }
    ///
    /// async fn example() -> Outcome<String, &'static str> {
    ///     Outcome::ok(1).and_then_async(load_owner).await
    /// }
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Runs an asynchronous fallible step that ignores the success value.
    ///
    /// The step is neither called nor awaited when `self` is `Err`.
    pub async fn and_then_with_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Ok(_) => f().await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value or awaits a fallback computed from the error.
    pub async fn unwrap_or_else_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error).await,
        }
    }
}
