//! Railway-style `Outcome<T, E>` with composable combinators and async lifting.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rail_result::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining on the Success Track
//!
//! ```
//! use rail_result::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! enum FruitError { ConversionError }
//!
//! struct Apple { name: String }
//! struct Fruit { name: String }
//! struct Orange { name: String }
//!
//! fn create_apple(name: &str) -> Outcome<Apple, FruitError> {
//!     Outcome::ok(Apple { name: name.to_string() })
//! }
//!
//! fn to_orange(_fruit: Fruit) -> Outcome<Orange, FruitError> {
//!     Outcome::err(FruitError::ConversionError)
//! }
//!
//! let orange = create_apple("gala")
//!     .map(|apple| Fruit { name: apple.name })
//!     .and_then(to_orange);
//!
//! assert!(orange.is_err());
//! assert_eq!(orange.as_err(), &FruitError::ConversionError);
//! ```
//!
//! ## Presence Without a Reason
//!
//! ```
//! use rail_result::{Maybe, Outcome};
//!
//! let port: Maybe<u16> = Outcome::none();
//! assert_eq!(port.unwrap_or(8080), 8080);
//! ```
//!
//! ## Terminal Extraction
//!
//! ```
//! use rail_result::Outcome;
//!
//! let count: Outcome<i32, &str> = Outcome::err("unreachable");
//! assert_eq!(count.unwrap_or_default(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome and the standard Result/Option
pub mod convert;
/// Macros for early return on the failure track
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for lifting values onto the rail
pub mod traits;
/// Outcome type, envelopes and their operations
pub mod types;

/// Async extensions over futures of Outcome (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use traits::*;
pub use types::{err, ok, Absent, Failure, Maybe, Outcome, Success};
