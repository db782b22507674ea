//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async entry points.
//!
//! # Usage
//!
//! ```rust,no_run
//! use error_or_value::prelude_async::*;
//!
//! async fn load_name() -> ErrorOr<String> {
//!     try_call_async(|| async { String::from("Robin") }).await
//! }
//! ```
//!
//! # Async-Specific
//!
//! - **Traits**: [`FutureCatchExt`](crate::async_ext::FutureCatchExt) - `.catch_faults()` and `.catch_all()` for futures
//! - **Types**: [`CatchFuture`](crate::async_ext::CatchFuture)
//! - **Functions**: the `try_*_async` entry points

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    try_call_async, try_call_async_as, try_call_async_expecting, try_call_async_with,
    try_run_async, try_run_async_as, try_run_async_expecting, try_run_async_with, CatchFuture,
    FutureCatchExt,
};

#[cfg(feature = "tokio")]
pub use crate::async_ext::Cancelled;
