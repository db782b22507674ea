//! Tokio task integration.
//!
//! A spawned task fails out of band: its panic, or its cancellation, shows
//! up as a `JoinError`. [`Catch::join`] feeds both through the same filter
//! and handler as an in-place capture.
//!
//! # Feature Flag
//!
//! Requires the `tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-or-value = { version = "0.3", features = ["tokio"] }
//! ```

use core::fmt;

use tokio::task::JoinHandle;

use crate::capture::{Catch, FaultHandler};
use crate::types::{ErrorOr, Fault};

/// Fault kind recorded when an awaited task was cancelled before finishing.
///
/// Filtered like any other kind: add it to the expected set to capture
/// cancellations, leave it out of a non-empty set to re-raise them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("task was cancelled before completion")
    }
}

impl std::error::Error for Cancelled {}

impl<H: FaultHandler> Catch<H> {
    /// Awaits a spawned task and settles its outcome with this policy.
    ///
    /// A task that panicked yields its panic payload as the fault; a task
    /// that was aborted yields a [`Cancelled`] fault.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use error_or_value::prelude_async::*;
    ///
    /// async fn example() {
    ///     let handle = tokio::spawn(async { 21 * 2 });
    ///     let outcome = Catch::all().join(handle).await;
    ///     assert_eq!(outcome.into_value(), Some(42));
    /// }
    /// ```
    pub async fn join<T>(self, handle: JoinHandle<T>) -> ErrorOr<T, H::Output> {
        let outcome = match handle.await {
            Ok(value) => Ok(value),
            Err(error) => match error.try_into_panic() {
                Ok(payload) => Err(Fault::from_panic(payload)),
                Err(_) => Err(Fault::new(Cancelled)),
            },
        };
        self.settle(outcome)
    }
}
