//! Tagged envelopes and the informationless error marker.
//!
//! [`Success`] and [`Failure`] tag a payload with the track it belongs to, so
//! `Success(x).into()` and `Failure(x).into()` stay distinct even when the two
//! payload types of an [`Outcome`] coincide.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Marks a payload as belonging to the success track.
///
/// # Examples
///
/// ```
/// use rail_result::{Outcome, Success};
///
/// let o: Outcome<&str, &str> = Success("ready").into();
/// assert!(o.is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Success<T>(pub T);

/// Marks a payload as belonging to the failure track.
///
/// # Examples
///
/// ```
/// use rail_result::{Failure, Outcome};
///
/// let o: Outcome<&str, &str> = Failure("broken").into();
/// assert!(o.is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failure<E> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    #[inline]
    fn from(value: Success<T>) -> Self {
        Outcome::Ok(value.0)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    #[inline]
    fn from(error: Failure<E>) -> Self {
        Outcome::Err(error.0)
    }
}

/// Error payload that carries no information.
///
/// Used as the failure side of [`Maybe`] to model "present or absent" without
/// a reason.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is absent")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Absent {}

/// An [`Outcome`] whose failure track carries no information.
///
/// This is a plain alias: a `Maybe<T>` is an `Outcome<T, Absent>` and every
/// combinator and unwrap operation applies unchanged.
///
/// # Examples
///
/// ```
/// use rail_result::{Maybe, Outcome};
///
/// fn find_port(name: &str) -> Maybe<u16> {
///     if name == "http" { Outcome::some(80) } else { Outcome::none() }
/// }
///
/// assert_eq!(find_port("http").map(|p| p + 8000).unwrap_or(0), 8080);
/// assert_eq!(find_port("gopher").unwrap_or(0), 0);
/// ```
pub type Maybe<T> = Outcome<T, Absent>;

impl<T> Outcome<T, Absent> {
    /// Creates a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Creates an absent value.
    #[inline]
    pub fn none() -> Self {
        Outcome::Err(Absent)
    }
}
