//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use rail_result::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`try_outcome!`]
//! - **Types**: [`Outcome`], [`Maybe`], [`Absent`], [`Success`], [`Failure`]
//! - **Functions**: [`ok`], [`err`]
//! - **Traits**: [`IntoOutcome`]
//!
//! # Examples
//!
//! ```
//! use rail_result::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .into_outcome()
//!         .map_err(|e| format!("bad port {raw:?}: {e}"))
//! }
//!
//! assert_eq!(parse_port("443").unwrap(), 443);
//! assert!(parse_port("https").is_err());
//! ```

// Macros
pub use crate::try_outcome;

// Core types
pub use crate::types::{err, ok, Absent, Failure, Maybe, Outcome, Success};

// Traits
pub use crate::traits::IntoOutcome;
