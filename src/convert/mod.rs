//! Conversion helpers between [`Outcome`] and the standard `Result`/`Option`.
//!
//! These adapters let an outcome pipeline start from, or hand back to, code
//! that speaks the core library types. The standard `?` operator works on
//! `Result`, so converting at a function boundary is the usual way to
//! propagate an outcome's error.
//!
//! # Examples
//!
//! ```
//! use rail_result::convert::*;
//! use rail_result::{Maybe, Outcome};
//!
//! let parsed: Outcome<u8, _> = result_to_outcome("42".parse::<u8>());
//! assert_eq!(parsed.unwrap(), 42);
//!
//! let present: Maybe<&str> = option_to_maybe(Some("gala"));
//! assert_eq!(maybe_to_option(present), Some("gala"));
//! ```

use crate::types::{Absent, Maybe, Outcome};

/// Converts a standard `Result` into an [`Outcome`].
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Ok(value)` if result is `Ok`
/// * `Outcome::Err(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use rail_result::convert::result_to_outcome;
/// use rail_result::Outcome;
///
/// let o = result_to_outcome(Err::<i32, &str>("failed"));
/// assert_eq!(o, Outcome::Err("failed"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(error) => Outcome::Err(error),
    }
}

/// Converts an [`Outcome`] into a standard `Result`.
///
/// # Examples
///
/// ```
/// use rail_result::convert::outcome_to_result;
/// use rail_result::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::ok(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome {
        Outcome::Ok(value) => Ok(value),
        Outcome::Err(error) => Err(error),
    }
}

/// Converts an `Option` into a [`Maybe`], mapping `None` to [`Absent`].
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(Absent),
    }
}

/// Converts a [`Maybe`] back into an `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.unwrap_or_none()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome_to_result(outcome)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option_to_maybe(option)
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into a standard `Result` so the error can propagate with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// fn load() -> Result<u32, &'static str> {
    ///     let id = Outcome::<u32, &str>::ok(7).into_result()?;
    ///     Ok(id + 1)
    /// }
    ///
    /// assert_eq!(load(), Ok(8));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        outcome_to_result(self)
    }
}
