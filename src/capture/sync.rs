//! Free-function entry points for synchronous operations.
//!
//! Each function is a one-line policy: `try_run*` for actions, `try_call*`
//! for value-producing functions, with the `_expecting`, `_with` and `_as`
//! suffixes selecting a filter, a catch handler or a declared kind.

use core::any::Any;

use super::Catch;
use crate::types::{ErrorOr, ExpectedFailures, Fault};

/// Runs `action`, returning `None` on completion or the captured fault.
///
/// # Examples
///
/// ```
/// use error_or_value::try_run;
///
/// assert!(try_run(|| {}).is_none());
/// assert!(try_run(|| panic!("boom")).is_some());
/// ```
#[inline]
pub fn try_run<F>(action: F) -> Option<Fault>
where
    F: FnOnce(),
{
    Catch::all().run(action)
}

/// Runs `action`, capturing only faults whose kind is in `expected`.
///
/// Any other fault is re-raised unchanged. An empty set captures everything.
#[inline]
pub fn try_run_expecting<F>(action: F, expected: ExpectedFailures) -> Option<Fault>
where
    F: FnOnce(),
{
    Catch::expecting(expected).run(action)
}

/// Runs `action`, converting a captured fault with `catch_handler`.
///
/// # Examples
///
/// ```
/// use error_or_value::try_run_with;
///
/// let error = try_run_with(|| panic!("bad state"), |fault| format!("wrapped: {}", fault));
/// assert_eq!(error.as_deref(), Some("wrapped: bad state"));
/// ```
#[inline]
pub fn try_run_with<F, H, E>(action: F, catch_handler: H) -> Option<E>
where
    F: FnOnce(),
    H: FnOnce(Fault) -> E,
{
    Catch::all().map_fault(catch_handler).run(action)
}

/// Runs `action`, recovering a captured fault as the declared kind `E`.
///
/// A fault of any other kind raises a [`KindMismatch`](crate::KindMismatch).
#[inline]
pub fn try_run_as<E, F>(action: F) -> Option<E>
where
    E: Any,
    F: FnOnce(),
{
    Catch::all().downcast::<E>().run(action)
}

/// Runs `func`, wrapping its value in [`ErrorOr::Success`] or the captured
/// fault in [`ErrorOr::Failure`].
///
/// # Examples
///
/// ```
/// use error_or_value::try_call;
///
/// let outcome = try_call(|| 42);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value(), Some(&42));
/// ```
#[inline]
pub fn try_call<T, F>(func: F) -> ErrorOr<T>
where
    F: FnOnce() -> T,
{
    Catch::all().call(func)
}

/// Runs `func`, capturing only faults whose kind is in `expected`.
///
/// # Examples
///
/// ```
/// use error_or_value::{failures, raise, try_call_expecting};
///
/// #[derive(Debug)]
/// struct ArgumentError;
/// #[derive(Debug)]
/// struct InvalidOperationError;
///
/// let escaped = std::panic::catch_unwind(|| {
///     try_call_expecting(|| -> i32 { raise(ArgumentError) }, failures![InvalidOperationError])
/// });
/// assert!(escaped.unwrap_err().is::<ArgumentError>());
/// ```
#[inline]
pub fn try_call_expecting<T, F>(func: F, expected: ExpectedFailures) -> ErrorOr<T>
where
    F: FnOnce() -> T,
{
    Catch::expecting(expected).call(func)
}

/// Runs `func`, converting a captured fault with `catch_handler`.
#[inline]
pub fn try_call_with<T, F, H, E>(func: F, catch_handler: H) -> ErrorOr<T, E>
where
    F: FnOnce() -> T,
    H: FnOnce(Fault) -> E,
{
    Catch::all().map_fault(catch_handler).call(func)
}

/// Runs `func`, recovering a captured fault as the declared kind `E`.
///
/// # Examples
///
/// ```
/// use error_or_value::{raise, try_call_as};
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound(u32);
///
/// let outcome = try_call_as::<NotFound, (), _>(|| raise(NotFound(7)));
/// assert_eq!(outcome.into_error(), Some(NotFound(7)));
/// ```
#[inline]
pub fn try_call_as<E, T, F>(func: F) -> ErrorOr<T, E>
where
    E: Any,
    F: FnOnce() -> T,
{
    Catch::all().downcast::<E>().call(func)
}
