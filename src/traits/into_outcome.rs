//! Extension trait for lifting core library types onto the rail.

use crate::types::{Absent, Maybe, Outcome};

/// Converts a value into an [`Outcome`] at the start of a pipeline.
///
/// Implemented for `Result<T, E>` and `Option<T>` (which becomes a
/// [`Maybe<T>`]).
///
/// # Examples
///
/// ```
/// use rail_result::traits::IntoOutcome;
/// use rail_result::Outcome;
///
/// let port = "8080".parse::<u16>().into_outcome().map(|p| p + 1);
/// assert_eq!(port.unwrap(), 8081);
///
/// let first = Vec::<i32>::new().first().copied().into_outcome();
/// assert!(first.is_err());
/// ```
pub trait IntoOutcome<T, E> {
    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T> IntoOutcome<T, Absent> for Option<T> {
    #[inline]
    fn into_outcome(self) -> Maybe<T> {
        self.into()
    }
}
