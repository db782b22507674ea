//! Integration tests for async capture.



#[cfg(feature = "tokio")]
mod tokio_tests;
