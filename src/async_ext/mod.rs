//! Async extensions for rail-result.
//!
//! This module lifts the [`Outcome`](crate::Outcome) combinators and unwrap
//! family over futures, keeping the same short-circuit rules as the sync
//! counterparts.
//!
//! - [`Lift`] applies a synchronous step after a future resolves
//! - [`Chain`] runs an asynchronous continuation after a future resolves
//! - [`OutcomeFutureExt`] exposes both as methods on any outcome future
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! rail-result = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rail_result::prelude_async::*;
//!
//! #[derive(Debug)]
//! struct NotFound;
//!
//! async fn fetch_owner(id: u64) -> Outcome<String, NotFound> {
//!     if id == 1 { Outcome::ok("root".into()) } else { Outcome::err(NotFound) }
//! }
//!
//! async fn owner_len(id: u64) -> Option<usize> {
//!     fetch_owner(id).map(|name| name.len()).unwrap_or_none().await
//! }
//! ```

mod chain;
mod future_ext;
mod lift;
mod outcome_async;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use chain::Chain;
pub use future_ext::OutcomeFutureExt;
pub use lift::Lift;
#[cfg(feature = "tracing")]
pub use tracing_ext::{OutcomeSpanExt, SpanFuture};
