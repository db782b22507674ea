pub mod policy;

#[cfg(feature = "tracing")]
pub mod tracing_tests;
