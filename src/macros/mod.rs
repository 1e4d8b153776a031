//! Macros for working with [`Outcome`](crate::Outcome) in imperative code.
//!
//! - [`macro@crate::try_outcome`] - Unwraps an `Ok` payload or returns the
//!   `Err` from the enclosing function, the `?` operator for outcomes.
//!
//! # Examples
//!
//! ```
//! use rail_result::{try_outcome, Outcome};
//!
//! fn lookup(id: u32) -> Outcome<&'static str, &'static str> {
//!     if id == 1 { Outcome::ok("gala") } else { Outcome::err("not found") }
//! }
//!
//! fn shout(id: u32) -> Outcome<String, &'static str> {
//!     let name = try_outcome!(lookup(id));
//!     Outcome::ok(name.to_uppercase())
//! }
//!
//! assert_eq!(shout(1), Outcome::Ok("GALA".to_string()));
//! assert_eq!(shout(2), Outcome::Err("not found"));
//! ```

/// Extracts the `Ok` payload of an outcome or returns early with its error.
///
/// The error is passed through [`From::from`] into the enclosing function's
/// error type, so it can widen a narrow error into a richer one.
///
/// # Syntax
///
/// - `try_outcome!(expr)` - `expr` must evaluate to an `Outcome<T, E>`
///
/// # Examples
///
/// ```rust
/// use rail_result::{try_outcome, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound;
///
/// #[derive(Debug, PartialEq)]
/// enum ApiError { Missing }
///
/// impl From<NotFound> for ApiError {
///     fn from(_: NotFound) -> Self { ApiError::Missing }
/// }
///
/// fn fetch() -> Outcome<u32, ApiError> {
///     let id = try_outcome!(Outcome::<u32, NotFound>::err(NotFound));
///     Outcome::ok(id)
/// }
///
/// assert_eq!(fetch(), Outcome::Err(ApiError::Missing));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => {
                return $crate::Outcome::Err(::core::convert::From::from(error));
            }
        }
    };
}
