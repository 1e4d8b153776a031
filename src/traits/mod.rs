//! Traits for moving values onto the rail.
//!
//! - [`IntoOutcome`]: lifts `Result` and `Option` into [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::IntoOutcome;
//!
//! let o = Ok::<_, &str>(10).into_outcome().map(|n| n * 3);
//! assert_eq!(o.unwrap(), 30);
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
