//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus async-specific items.
//!
//! # Usage
//!
//! ```rust
//! use rail_result::prelude_async::*;
//!
//! async fn fetch_id() -> Outcome<u32, &'static str> {
//!     Outcome::ok(7)
//! }
//!
//! async fn next_id() -> u32 {
//!     fetch_id().map(|id| id + 1).unwrap_or(0).await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`try_outcome!`]
//! - **Types**: [`Outcome`], [`Maybe`], [`Absent`], [`Success`], [`Failure`]
//! - **Traits**: [`IntoOutcome`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`OutcomeFutureExt`](crate::async_ext::OutcomeFutureExt)
//! - **Types**: [`Lift`](crate::async_ext::Lift), [`Chain`](crate::async_ext::Chain)
//! - **Tracing** (with `tracing`): [`OutcomeSpanExt`](crate::async_ext::OutcomeSpanExt)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{Chain, Lift, OutcomeFutureExt};

#[cfg(feature = "tracing")]
pub use crate::async_ext::OutcomeSpanExt;
