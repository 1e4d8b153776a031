#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Railway-style container holding either a success value or a domain failure.
///
/// `Outcome<T, E>` always holds exactly one payload: `Ok(T)` on the success
/// track or `Err(E)` on the failure track. The active variant never changes
/// after construction; every combinator consumes the value and returns a new
/// `Outcome`.
///
/// There is no implicit conversion from a bare `T` or `E`. Build values with
/// [`Outcome::ok`]/[`Outcome::err`], the free functions [`ok`]/[`err`], or the
/// [`Success`](crate::types::Success)/[`Failure`](crate::types::Failure)
/// envelopes. This keeps construction unambiguous when `T` and `E` are the
/// same type.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` implements `Serialize` and
/// `Deserialize` whenever `T` and `E` do.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The domain error type
///
/// # Examples
///
/// ```
/// use rail_result::Outcome;
///
/// let fetched: Outcome<u32, &str> = Outcome::ok(7);
/// assert!(fetched.is_ok());
///
/// // Same payload type on both tracks stays unambiguous.
/// let failed: Outcome<String, String> = Outcome::err("timeout".to_string());
/// assert!(failed.is_err());
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Success track.
    Ok(T),
    /// Failure track.
    Err(E),
}

/// Shorthand for [`Outcome::ok`].
///
/// # Examples
///
/// ```
/// use rail_result::{ok, Outcome};
///
/// let value: Outcome<i32, &str> = ok(1);
/// assert_eq!(value, Outcome::Ok(1));
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Shorthand for [`Outcome::err`].
///
/// # Examples
///
/// ```
/// use rail_result::{err, Outcome};
///
/// let value: Outcome<i32, &str> = err("boom");
/// assert_eq!(value, Outcome::Err("boom"));
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Creates an outcome on the success track.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.unwrap(), 42);
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an outcome on the failure track.
    ///
    /// # Arguments
    ///
    /// * `error` - The domain error payload
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("missing");
    /// assert_eq!(o.unwrap_err(), "missing");
    /// ```
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the outcome is on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::ok(1).is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert!(Outcome::<(), i32>::err(1).is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`. Reading the inactive variant is a caller
    /// bug, not a recoverable condition; use [`ok_ref`](Outcome::ok_ref) when
    /// the variant is not known.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<String, ()>::ok("apple".to_string());
    /// assert_eq!(o.as_ok(), "apple");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn as_ok(&self) -> &T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("called `Outcome::as_ok()` on an `Err` value"),
        }
    }

    /// Borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<(), &str>::err("not found");
    /// assert_eq!(*o.as_err(), "not found");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn as_err(&self) -> &E {
        match self {
            Self::Ok(_) => panic!("called `Outcome::as_err()` on an `Ok` value"),
            Self::Err(error) => error,
        }
    }

    /// Borrows the success payload if present.
    #[must_use]
    #[inline]
    pub fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the error payload if present.
    #[must_use]
    #[inline]
    pub fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    ///
    /// Lets a pipeline run over borrowed payloads without consuming the
    /// original.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<String, ()>::ok("gala".to_string());
    /// let len = o.as_ref().map(|name| name.len());
    /// assert_eq!(len, Outcome::Ok(4));
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts `&mut Outcome<T, E>` into `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Total two-handler match.
    ///
    /// Invokes exactly one handler, the one matching the active variant, and
    /// returns its result.
    ///
    /// # Arguments
    ///
    /// * `on_ok` - Handler for the success payload
    /// * `on_err` - Handler for the error payload
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let label = Outcome::<u8, &str>::err("offline")
    ///     .fold(|n| format!("got {n}"), |e| format!("failed: {e}"));
    /// assert_eq!(label, "failed: offline");
    /// ```
    #[inline]
    pub fn fold<R, OkF, ErrF>(self, on_ok: OkF, on_err: ErrF) -> R
    where
        OkF: FnOnce(T) -> R,
        ErrF: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }
}
