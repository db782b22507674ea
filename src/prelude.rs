//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_or_value::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failures!`]
//! - **Types**: [`Catch`], [`ErrorOr`], [`ExpectedFailures`], [`Fault`]
//! - **Functions**: [`raise`] and the sync `try_*` entry points
//!
//! # Examples
//!
//! ```
//! use error_or_value::prelude::*;
//!
//! fn parse_port(raw: &str) -> ErrorOr<u16, String> {
//!     try_call_with(|| raw.parse::<u16>().expect("port must be numeric"), |fault| fault.to_string())
//! }
//!
//! assert_eq!(parse_port("8080").into_value(), Some(8080));
//! assert!(parse_port("http").is_failure());
//! ```

// Macros
pub use crate::failures;

// Core types
pub use crate::capture::Catch;
pub use crate::types::{ErrorOr, ExpectedFailures, Fault};

// Entry points
pub use crate::capture::{
    try_call, try_call_as, try_call_expecting, try_call_with, try_run, try_run_as,
    try_run_expecting, try_run_with,
};
pub use crate::types::raise;
