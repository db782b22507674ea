//! Async entry points: [`Catch::call_async`], [`Catch::run_async`] and the
//! `try_*_async` free functions.

use core::any::Any;
use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use crate::capture::{Catch, Downcast, FaultHandler, Identity, MapFault};
use crate::types::{ExpectedFailures, Fault};

use super::catch_future::CatchFuture;

impl<H: FaultHandler> Catch<H> {
    /// Invokes `operation` and awaits the future it returns, capturing
    /// faults raised by either step.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use error_or_value::prelude_async::*;
    ///
    /// async fn create_user(name: &str) -> String {
    ///     assert!(name.len() > 2, "name too short");
    ///     name.to_owned()
    /// }
    ///
    /// async fn example() {
    ///     let outcome = Catch::all().call_async(|| create_user("Robin")).await;
    ///     assert_eq!(outcome.into_value().as_deref(), Some("Robin"));
    /// }
    /// ```
    pub fn call_async<F, Fut>(self, operation: F) -> CatchFuture<Fut, H>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(future) => CatchFuture::new(future, self),
            Err(payload) => CatchFuture::faulted(Fault::from_panic(payload), self),
        }
    }

    /// Async counterpart of [`Catch::run`].
    pub async fn run_async<F, Fut>(self, operation: F) -> Option<H::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.call_async(operation).await.into_error()
    }
}

/// Awaits an action, returning `None` on completion or the captured fault.
pub async fn try_run_async<F, Fut>(operation: F) -> Option<Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    Catch::all().run_async(operation).await
}

/// Awaits an action, capturing only faults whose kind is in `expected`.
pub async fn try_run_async_expecting<F, Fut>(
    operation: F,
    expected: ExpectedFailures,
) -> Option<Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    Catch::expecting(expected).run_async(operation).await
}

/// Awaits an action, converting a captured fault with `catch_handler`.
pub async fn try_run_async_with<F, Fut, H, E>(operation: F, catch_handler: H) -> Option<E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
    H: FnOnce(Fault) -> E,
{
    Catch::all().map_fault(catch_handler).run_async(operation).await
}

/// Awaits an action, recovering a captured fault as the declared kind `E`.
///
/// A captured fault of another kind raises a
/// [`KindMismatch`](crate::KindMismatch).
pub async fn try_run_async_as<E, F, Fut>(operation: F) -> Option<E>
where
    E: Any,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    Catch::all().downcast::<E>().run_async(operation).await
}

/// Awaits a value-producing operation.
///
/// # Examples
///
/// ```rust,no_run
/// use error_or_value::async_ext::try_call_async;
///
/// async fn example() {
///     let outcome = try_call_async(|| async { "Robin" }).await;
///     assert_eq!(outcome.into_value(), Some("Robin"));
/// }
/// ```
#[inline]
pub fn try_call_async<F, Fut>(operation: F) -> CatchFuture<Fut, Identity>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    Catch::all().call_async(operation)
}

/// Awaits a value-producing operation, capturing only faults whose kind is
/// in `expected`.
#[inline]
pub fn try_call_async_expecting<F, Fut>(
    operation: F,
    expected: ExpectedFailures,
) -> CatchFuture<Fut, Identity>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    Catch::expecting(expected).call_async(operation)
}

/// Awaits a value-producing operation, converting a captured fault with
/// `catch_handler`.
#[inline]
pub fn try_call_async_with<F, Fut, H, E>(
    operation: F,
    catch_handler: H,
) -> CatchFuture<Fut, MapFault<H>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    H: FnOnce(Fault) -> E,
{
    Catch::all().map_fault(catch_handler).call_async(operation)
}

/// Awaits a value-producing operation, recovering a captured fault as the
/// declared kind `E`.
#[inline]
pub fn try_call_async_as<E, F, Fut>(operation: F) -> CatchFuture<Fut, Downcast<E>>
where
    E: Any,
    F: FnOnce() -> Fut,
    Fut: Future,
{
    Catch::all().downcast::<E>().call_async(operation)
}
