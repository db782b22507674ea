//! Extension trait for capturing faults raised by any `Future`.
//!
//! Mirrors [`Catch::call_async`] for futures that already exist.

use core::future::Future;

use crate::capture::{Catch, Identity};

use super::catch_future::CatchFuture;

/// Extension trait that wraps a future in a capture policy.
///
/// # Examples
///
/// ```rust,no_run
/// use error_or_value::prelude_async::*;
///
/// async fn fetch_name() -> String {
///     String::from("Robin")
/// }
///
/// async fn example() {
///     let outcome = fetch_name().catch_all().await;
///     assert_eq!(outcome.value().map(String::as_str), Some("Robin"));
/// }
/// ```
pub trait FutureCatchExt: Future + Sized {
    /// Settles faults raised while polling this future with `policy`.
    #[inline]
    fn catch_faults<H>(self, policy: Catch<H>) -> CatchFuture<Self, H> {
        CatchFuture::new(self, policy)
    }

    /// Captures every fault raised while polling this future.
    #[inline]
    fn catch_all(self) -> CatchFuture<Self, Identity> {
        self.catch_faults(Catch::all())
    }
}

impl<Fut> FutureCatchExt for Fut where Fut: Future {}
