//! The capture executor.
//!
//! A [`Catch`] policy runs an operation once, intercepts anything it raises,
//! and turns the failure into data:
//!
//! 1. The operation completes: `run` yields `None`, `call` yields
//!    [`ErrorOr::Success`].
//! 2. It raises a fault whose kind is outside a non-empty expected set: the
//!    fault is re-raised unchanged.
//! 3. Otherwise the fault is captured, passed through the policy's
//!    [`FaultHandler`], and returned as `Some(error)` or
//!    [`ErrorOr::Failure`].
//!
//! The filter always runs on the original fault, before any handler.
//!
//! # Examples
//!
//! ```
//! use error_or_value::{raise, Catch};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//! #[derive(Debug, PartialEq)]
//! struct InvalidCastError(String);
//!
//! let outcome = Catch::all()
//!     .expect_kind::<ArgumentError>()
//!     .map_fault(|_| InvalidCastError("msg".into()))
//!     .call(|| -> i32 { raise(ArgumentError) });
//!
//! assert_eq!(outcome.into_error(), Some(InvalidCastError("msg".into())));
//! ```
//!
//! # Unwinding
//!
//! Capture relies on unwinding. Under `panic = "abort"` nothing can be
//! captured and every failure terminates the process.
//!
//! Operations are run behind [`AssertUnwindSafe`]: state the operation
//! borrows may be left half-updated when a fault is captured, exactly as with
//! [`std::thread::JoinHandle::join`].

mod handler;
mod sync;

pub use handler::{Downcast, FaultHandler, Identity, MapFault};
pub use sync::*;

use core::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::macros::log_event;
use crate::types::{ErrorOr, ExpectedFailures, FailureKind, Fault};

/// A capture policy: which fault kinds to accept, and how to convert them.
///
/// Built with [`Catch::all`] or [`Catch::expecting`], refined with
/// [`expect_kind`](Catch::expect_kind), [`map_fault`](Catch::map_fault) or
/// [`downcast`](Catch::downcast), and consumed by
/// [`run`](Catch::run) / [`call`](Catch::call) (or their async
/// counterparts).
#[derive(Clone, Debug)]
#[must_use = "a capture policy does nothing until it runs an operation"]
pub struct Catch<H = Identity> {
    expected: ExpectedFailures,
    handler: H,
}

impl Catch<Identity> {
    /// Captures every fault kind and returns faults unchanged.
    #[inline]
    pub fn all() -> Self {
        Self::expecting(ExpectedFailures::any())
    }

    /// Captures only the kinds in `expected`; an empty set captures
    /// everything.
    #[inline]
    pub fn expecting(expected: ExpectedFailures) -> Self {
        Self { expected, handler: Identity }
    }
}

impl Default for Catch<Identity> {
    #[inline]
    fn default() -> Self {
        Self::all()
    }
}

impl<H> Catch<H> {
    /// Adds `K` to the expected set.
    #[inline]
    pub fn expect_kind<K: Any>(mut self) -> Self {
        self.expected.insert(FailureKind::of::<K>());
        self
    }

    /// Replaces the expected set.
    #[inline]
    pub fn with_expected(mut self, expected: ExpectedFailures) -> Self {
        self.expected = expected;
        self
    }

    /// Installs a catch handler that turns each captured fault into an `E`.
    #[inline]
    pub fn map_fault<F, E>(self, f: F) -> Catch<MapFault<F>>
    where
        F: FnOnce(Fault) -> E,
    {
        Catch { expected: self.expected, handler: MapFault::new(f) }
    }

    /// Declares that captured faults are of kind `E`.
    ///
    /// A captured fault of another kind raises a
    /// [`KindMismatch`](crate::KindMismatch) instead of being returned.
    /// Pair this with a matching expected set, or use
    /// [`map_fault`](Self::map_fault), to rule the mismatch out.
    #[inline]
    pub fn downcast<E: Any>(self) -> Catch<Downcast<E>> {
        Catch { expected: self.expected, handler: Downcast::new() }
    }

    #[inline]
    pub fn expected(&self) -> &ExpectedFailures {
        &self.expected
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: FaultHandler> Catch<H> {
    /// Runs a value-producing operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::Catch;
    ///
    /// let outcome = Catch::all().call(|| 42);
    /// assert_eq!(outcome.value(), Some(&42));
    /// ```
    pub fn call<T, F>(self, func: F) -> ErrorOr<T, H::Output>
    where
        F: FnOnce() -> T,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(func)).map_err(Fault::from_panic);
        self.settle(outcome)
    }

    /// Runs an operation that produces nothing, returning the captured
    /// failure if there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::Catch;
    ///
    /// let error = Catch::all().run(|| panic!("no config"));
    /// assert_eq!(error.as_ref().and_then(|fault| fault.message()), Some("no config"));
    /// ```
    pub fn run<F>(self, action: F) -> Option<H::Output>
    where
        F: FnOnce(),
    {
        self.call(action).into_error()
    }

    /// Applies the policy to a fault obtained elsewhere.
    ///
    /// Re-raises `fault` if its kind is not admitted; otherwise returns the
    /// handler's output.
    pub fn capture(self, fault: Fault) -> H::Output {
        if !self.expected.admits(&fault) {
            log_event!(
                warn,
                kind = fault.kind_name().unwrap_or("<erased>"),
                expected = %self.expected,
                "re-raising failure outside the expected set"
            );
            fault.resume()
        }
        log_event!(debug, kind = fault.kind_name().unwrap_or("<erased>"), "captured failure");
        self.handler.handle(fault)
    }

    pub(crate) fn settle<T>(self, outcome: Result<T, Fault>) -> ErrorOr<T, H::Output> {
        match outcome {
            Ok(value) => ErrorOr::Success(value),
            Err(fault) => ErrorOr::Failure(self.capture(fault)),
        }
    }
}
