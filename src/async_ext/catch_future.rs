//! Future wrapper that captures faults raised while polling.
//!
//! This module provides `CatchFuture`, which polls an inner future behind an
//! unwind boundary and settles the outcome through a [`Catch`] policy.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::capture::{Catch, FaultHandler};
use crate::types::{ErrorOr, Fault};

pin_project! {
    /// A Future that resolves to an [`ErrorOr`] instead of unwinding.
    ///
    /// Faults raised by any `poll` of the inner future are filtered and
    /// converted by the policy once, when the future completes. A fault
    /// raised while the future was being *created* is held and surfaces on
    /// the first poll, so re-raising an unexpected kind always happens at the
    /// `.await` point.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `CatchFuture` drops the inner future; nothing is captured.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use error_or_value::prelude_async::*;
    ///
    /// async fn example() {
    ///     let outcome = Catch::all().call_async(|| async { 42 }).await;
    ///     assert_eq!(outcome.into_value(), Some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<Fut, H> {
        #[pin]
        future: Option<Fut>,
        early: Option<Fault>,
        policy: Option<Catch<H>>,
    }
}

impl<Fut, H> CatchFuture<Fut, H> {
    /// Wraps `future` so faults it raises are settled by `policy`.
    #[inline]
    pub fn new(future: Fut, policy: Catch<H>) -> Self {
        Self { future: Some(future), early: None, policy: Some(policy) }
    }

    /// A future that settles an already-raised `fault` on first poll.
    #[inline]
    pub(crate) fn faulted(fault: Fault, policy: Catch<H>) -> Self {
        Self { future: None, early: Some(fault), policy: Some(policy) }
    }
}

impl<Fut, H> Future for CatchFuture<Fut, H>
where
    Fut: Future,
    H: FaultHandler,
{
    type Output = ErrorOr<Fut::Output, H::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let outcome = match this.future.as_mut().as_pin_mut() {
            Some(future) => match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
                Ok(Poll::Pending) => return Poll::Pending,
                Ok(Poll::Ready(value)) => Ok(value),
                Err(payload) => Err(Fault::from_panic(payload)),
            },
            None => Err(this
                .early
                .take()
                .expect("CatchFuture polled after completion; this is a bug")),
        };
        this.future.set(None);

        let policy = this
            .policy
            .take()
            .expect("CatchFuture polled after completion; this is a bug");
        Poll::Ready(policy.settle(outcome))
    }
}

impl<Fut, H> FusedFuture for CatchFuture<Fut, H>
where
    Fut: Future,
    H: FaultHandler,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.policy.is_none()
    }
}
