use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Maps the success value using the provided function.
    ///
    /// If the outcome is `Err`, the error passes through unchanged and `f` is
    /// never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Ok(42));
    ///
    /// let untouched = Outcome::<i32, &str>::err("bad").map(|x| x * 2);
    /// assert_eq!(untouched, Outcome::Err("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error value while preserving the success track.
    ///
    /// If the outcome is `Ok`, `f` is never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum ApiError { Upstream(u16) }
    ///
    /// let mapped = Outcome::<(), u16>::err(503).map_err(ApiError::Upstream);
    /// assert_eq!(mapped, Outcome::Err(ApiError::Upstream(503)));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a fallible step onto the success track.
    ///
    /// On `Ok`, returns the outcome produced by `f` directly, without nesting.
    /// On `Err`, short-circuits: the error is propagated and `f` is never
    /// called.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome from the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 { Outcome::ok(input) } else { Outcome::err("not even") }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).and_then(parse_even), Outcome::Ok(4));
    /// assert_eq!(Outcome::ok(3).and_then(parse_even), Outcome::Err("not even"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a fallible step that does not need the current success value.
    ///
    /// Equivalent to `and_then(|_| f())`: `f` runs only on `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let connected = Outcome::<(), &str>::ok(());
    /// let greeting = connected.and_then_with(|| Outcome::ok("hello"));
    /// assert_eq!(greeting, Outcome::Ok("hello"));
    /// ```
    #[inline]
    pub fn and_then_with<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        self.and_then(|_| f())
    }

    /// Returns `other` if this outcome is `Ok`, otherwise propagates this error.
    ///
    /// `other` is already evaluated; use [`and_then`](Outcome::and_then) for a
    /// lazily computed continuation.
    ///
    /// # Arguments
    ///
    /// * `other` - Outcome to return when this one succeeded
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let a = Outcome::<i32, &str>::ok(1);
    /// assert_eq!(a.and(Outcome::<&str, &str>::ok("next")), Outcome::Ok("next"));
    ///
    /// let b = Outcome::<i32, &str>::err("first");
    /// assert_eq!(b.and(Outcome::<&str, &str>::err("second")), Outcome::Err("first"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }
}
