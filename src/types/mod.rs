//! Value types produced by the capture executor.
//!
//! - [`ErrorOr`]: the success-or-failure container
//! - [`Fault`]: an owned, captured failure signal
//! - [`FailureKind`] / [`ExpectedFailures`]: kind identities and the filter set
//! - [`KindMismatch`]: the contract-violation signal for undeclared kinds
//!
//! # Examples
//!
//! ```
//! use error_or_value::{ErrorOr, Fault};
//!
//! let outcome: ErrorOr<&str> = ErrorOr::failure(Fault::new("lost connection"));
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().and_then(Fault::message), Some("lost connection"));
//! ```

pub mod error_or;
pub mod fault;
pub mod kind;

pub use error_or::*;
pub use fault::*;
pub use kind::*;

