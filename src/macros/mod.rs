//! Macros for declaring capture filters.
//!
//! - [`macro@crate::failures`] - Builds an [`ExpectedFailures`](crate::ExpectedFailures)
//!   set from a list of kind types.
//!
//! # Examples
//!
//! ```
//! use error_or_value::{failures, raise, try_call_expecting};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//! #[derive(Debug)]
//! struct TimeoutError;
//!
//! let outcome = try_call_expecting(|| -> u8 { raise(TimeoutError) }, failures![ArgumentError, TimeoutError]);
//! assert!(outcome.is_failure());
//! ```

/// Builds an [`ExpectedFailures`](crate::ExpectedFailures) set from kind types.
///
/// `failures![]` is the empty set, which admits every kind.
///
/// # Examples
///
/// ```
/// use error_or_value::failures;
///
/// let expected = failures![std::io::Error, String];
/// assert_eq!(expected.len(), 2);
/// assert!(failures![].is_empty());
/// ```
#[macro_export]
macro_rules! failures {
    ($($kind:ty),* $(,)?) => {
        $crate::ExpectedFailures::new()$(.with::<$kind>())*
    };
}

/// Emits a `tracing` event under the crate's target when the `tracing`
/// feature is enabled; expands to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!(target: "error_or_value", $($arg)+);
        }
    };
}

pub(crate) use log_event;
