//! Async capture for error-or-value.
//!
//! The same policy rules as the sync executor apply: an operation returning a
//! future is invoked once, the future is awaited, and a fault raised during
//! either step is filtered and converted. Only the single awaited outcome is
//! involved; no tasks are spawned and no timers are set.
//!
//! A cancellation that surfaces as a raised failure is treated like any
//! other kind.
//!
//! # Feature Flag
//!
//! Enabled by the default `async` feature:
//!
//! ```toml
//! [dependencies]
//! error-or-value = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use error_or_value::prelude_async::*;
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//!
//! async fn create_user(name: &'static str) -> &'static str {
//!     if name.len() <= 2 {
//!         raise(ArgumentError);
//!     }
//!     name
//! }
//!
//! async fn example() {
//!     let (error, user) = try_call_async(|| create_user("Al")).await.into_parts();
//!     assert!(error.is_some_and(|fault| fault.is::<ArgumentError>()));
//!     assert!(user.is_none());
//! }
//! ```

mod catch_future;
mod entry;
mod future_ext;
#[cfg(feature = "tokio")]
mod join;

pub use catch_future::CatchFuture;
pub use entry::{
    try_call_async, try_call_async_as, try_call_async_expecting, try_call_async_with,
    try_run_async, try_run_async_as, try_run_async_expecting, try_run_async_with,
};
pub use future_ext::FutureCatchExt;
#[cfg(feature = "tokio")]
pub use join::Cancelled;
