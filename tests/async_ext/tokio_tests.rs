//! Tests for Tokio task integration.

use std::time::Duration;

use error_or_value::prelude_async::*;

use crate::common::{ArgumentError, InvalidOperationError};

#[tokio::test]
async fn join_returns_task_value() {
    let handle = tokio::spawn(async { 21 * 2 });
    let outcome = Catch::all().join(handle).await;
    assert_eq!(outcome.into_value(), Some(42));
}

#[tokio::test]
async fn join_captures_task_panic_payload() {
    let handle = tokio::spawn(async { raise::<ArgumentError>(ArgumentError::new("task")) });
    let outcome: ErrorOr<()> = Catch::all().join(handle).await;
    assert_eq!(
        outcome.error().and_then(|fault| fault.downcast_ref::<ArgumentError>()),
        Some(&ArgumentError::new("task"))
    );
}

#[tokio::test]
async fn join_reports_cancellation_as_fault() {
    let handle = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(60)).await;
    });
    handle.abort();

    let outcome = Catch::expecting(failures![Cancelled]).join(handle).await;
    assert!(outcome.error().is_some_and(|fault| fault.is::<Cancelled>()));
}

#[tokio::test]
async fn join_reraises_cancellation_outside_expected_set() {
    let joined = tokio::spawn(async {
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        handle.abort();
        Catch::expecting(failures![InvalidOperationError]).join(handle).await
    })
    .await;

    assert!(joined.unwrap_err().into_panic().is::<Cancelled>());
}

#[test]
fn cancelled_display() {
    assert!(Cancelled.to_string().contains("cancelled"));
}
