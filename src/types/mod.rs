//! The [`Outcome`] container and its operations.
//!
//! The type itself lives in [`outcome`]; its combinators and unwrap family are
//! split into sibling modules that each add an `impl` block.
//!
//! # Examples
//!
//! ```
//! use rail_result::types::{Outcome, Success};
//!
//! let fetched: Outcome<&str, u16> = Success("gala").into();
//! let name_len = fetched
//!     .map(str::len)
//!     .and_then(|n| if n > 2 { Outcome::ok(n) } else { Outcome::err(400) });
//!
//! assert_eq!(name_len.unwrap_or_default(), 4);
//! ```

pub mod combinators;
pub mod envelope;
pub mod outcome;
#[cfg(feature = "tracing")]
pub mod trace;
pub mod unwrap;

pub use envelope::*;
pub use outcome::*;
