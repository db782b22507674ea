//! Run fallible operations and receive their failures as values.
//!
//! A [`Catch`] policy invokes an operation once, intercepts whatever it
//! raises, and hands back an [`ErrorOr`] (for value-producing operations) or
//! an `Option` of the failure (for actions). Callers declare which failure
//! kinds they are prepared to treat as data; anything else keeps unwinding.
//!
//! # Examples
//!
//! ## Capture Everything
//!
//! ```
//! use error_or_value::{raise, try_call};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//!
//! let ok = try_call(|| 42);
//! assert_eq!(ok.value(), Some(&42));
//!
//! let failed = try_call(|| -> i32 { raise(ArgumentError) });
//! assert!(failed.error().is_some_and(|fault| fault.is::<ArgumentError>()));
//! ```
//!
//! ## Expected Kinds Only
//!
//! ```
//! use error_or_value::{failures, raise, try_call_expecting};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//! #[derive(Debug)]
//! struct InvalidOperationError;
//!
//! let escaped = std::panic::catch_unwind(|| {
//!     try_call_expecting(|| -> i32 { raise(ArgumentError) }, failures![InvalidOperationError])
//! });
//! assert!(escaped.unwrap_err().is::<ArgumentError>());
//! ```
//!
//! ## Converting the Failure
//!
//! ```
//! use error_or_value::{raise, try_call_with};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//! #[derive(Debug, PartialEq)]
//! struct InvalidCastError(String);
//!
//! let outcome = try_call_with(
//!     || -> i32 { raise(ArgumentError) },
//!     |_| InvalidCastError("msg".to_string()),
//! );
//! assert_eq!(outcome.into_error(), Some(InvalidCastError("msg".to_string())));
//! ```

/// The capture executor: policies and sync entry points
pub mod capture;
/// Macros for declaring expected failure kinds
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Result container, captured faults and failure kinds
pub mod types;

/// Async capture (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use capture::*;
pub use types::{raise, ErrorOr, ExpectedFailures, FailureKind, Fault, KindMismatch};
