use core::fmt;

use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`, with the error's `Debug` output in the
    /// message. Unwrapping a failure is a caller bug; it never falls back to a
    /// default.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(2).unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use rail_result::Outcome;
    ///
    /// Outcome::<i32, &str>::err("emergency failure").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => violation("called `Outcome::unwrap()` on an `Err` value", &error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`, with the value's `Debug` output in the
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::err("gone").unwrap_err(), "gone");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => violation("called `Outcome::unwrap_err()` on an `Ok` value", &value),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, panicking with `msg` on `Err`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use rail_result::Outcome;
    ///
    /// Outcome::<u16, &str>::err("unset").expect("port must be configured");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => violation(msg, &error),
        }
    }

    /// Returns the error value, panicking with `msg` on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => violation(msg, &value),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    ///
    /// `default` is evaluated eagerly by the caller; prefer
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) when building it is costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::err("x").unwrap_or(7), 7);
    /// assert_eq!(Outcome::<i32, &str>::ok(1).unwrap_or(7), 1);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes a fallback from the error.
    ///
    /// `f` is only called on `Err`.
    ///
    /// # Arguments
    ///
    /// * `f` - Fallback computed from the error
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::err("four").unwrap_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    ///
    /// Types without a natural empty value do not implement [`Default`] and
    /// must go through [`unwrap_or`](Outcome::unwrap_or) or
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::err("nope").unwrap_or_default(), 0);
    /// assert_eq!(Outcome::<String, ()>::err(()).unwrap_or_default(), "");
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns the success value as `Some`, or `None` on `Err`.
    ///
    /// The error is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(3).unwrap_or_none(), Some(3));
    /// assert_eq!(Outcome::<i32, &str>::err("x").unwrap_or_none(), None);
    /// ```
    #[inline]
    pub fn unwrap_or_none(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error value or `default`.
    #[inline]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Self::Ok(_) => default,
            Self::Err(error) => error,
        }
    }

    /// Returns the error value or computes one from the success value.
    ///
    /// `f` is only called on `Ok`.
    #[inline]
    pub fn unwrap_err_or_else<F>(self, f: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => error,
        }
    }

    /// Returns the error value or `E::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, u8>::ok(5).unwrap_err_or_default(), 0);
    /// assert_eq!(Outcome::<i32, u8>::err(9).unwrap_err_or_default(), 9);
    /// ```
    #[inline]
    pub fn unwrap_err_or_default(self) -> E
    where
        E: Default,
    {
        match self {
            Self::Ok(_) => E::default(),
            Self::Err(error) => error,
        }
    }

    /// Returns the error value as `Some`, or `None` on `Ok`.
    #[inline]
    pub fn unwrap_err_or_none(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }
}

#[inline(never)]
#[cold]
#[track_caller]
fn violation(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
