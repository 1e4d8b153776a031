//! Tracing hooks for synchronous outcomes (requires `tracing` feature).
//!
//! Events are emitted as the value passes by; the outcome itself is returned
//! untouched.

use core::fmt::Debug;

use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Emits a `warn` event when the outcome is `Err`.
    ///
    /// # Arguments
    ///
    /// * `operation` - Label recorded as the `operation` field
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("disk full").trace_err("save_profile");
    /// assert!(o.is_err());
    /// ```
    #[inline]
    pub fn trace_err(self, operation: &'static str) -> Self
    where
        E: Debug,
    {
        if let Self::Err(error) = &self {
            tracing::warn!(operation, error = ?error, "outcome left the success track");
        }
        self
    }

    /// Emits a `debug` event when the outcome is `Ok`.
    #[inline]
    pub fn trace_ok(self, operation: &'static str) -> Self
    where
        T: Debug,
    {
        if let Self::Ok(value) = &self {
            tracing::debug!(operation, value = ?value, "outcome on the success track");
        }
        self
    }
}
