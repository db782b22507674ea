use std::cell::Cell;
use std::panic;

use error_or_value::{failures, raise, Catch, ErrorOr, ExpectedFailures, Fault};

use crate::common::{ArgumentError, InvalidCastError, InvalidOperationError};

#[test]
fn default_policy_captures_everything() {
    let policy: Catch = Catch::default();
    assert!(policy.expected().is_empty());
    assert!(policy.run(|| panic!("anything")).is_some());
}

#[test]
fn expect_kind_accumulates() {
    let policy = Catch::all().expect_kind::<ArgumentError>().expect_kind::<InvalidOperationError>();
    assert_eq!(policy.expected(), &failures![InvalidOperationError, ArgumentError]);
}

#[test]
fn with_expected_replaces_the_set() {
    let policy = Catch::expecting(failures![ArgumentError]).with_expected(ExpectedFailures::any());
    assert!(policy.expected().is_empty());
}

#[test]
fn filter_runs_before_handler() {
    let handled = Cell::new(false);
    let escaped = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        Catch::all()
            .expect_kind::<InvalidCastError>()
            .map_fault(|_| {
                handled.set(true);
                InvalidCastError("converted".into())
            })
            .call(|| -> i32 { raise(ArgumentError::new("original")) })
    }));

    assert!(escaped.unwrap_err().is::<ArgumentError>());
    assert!(!handled.get(), "handler must not run for a filtered-out kind");
}

#[test]
fn filter_uses_original_kind_not_transformed_kind() {
    let outcome = Catch::all()
        .expect_kind::<ArgumentError>()
        .map_fault(|_| InvalidCastError("msg".into()))
        .call(|| -> i32 { raise(ArgumentError::new("original")) });

    assert_eq!(outcome, ErrorOr::failure(InvalidCastError("msg".into())));
}

#[test]
fn downcast_with_matching_filter_never_mismatches() {
    let policy = Catch::expecting(failures![ArgumentError]).downcast::<ArgumentError>();
    let outcome = policy.call(|| -> u8 { raise(ArgumentError::new("typed")) });
    assert_eq!(outcome.into_error(), Some(ArgumentError::new("typed")));
}

#[test]
fn downcast_with_matching_filter_reraises_other_kinds_untouched() {
    let escaped = panic::catch_unwind(|| {
        Catch::expecting(failures![ArgumentError])
            .downcast::<ArgumentError>()
            .call(|| -> u8 { raise(InvalidOperationError) })
    });
    assert!(escaped.unwrap_err().is::<InvalidOperationError>());
}

#[test]
fn capture_applies_policy_to_existing_fault() {
    let converted = Catch::all()
        .map_fault(|fault: Fault| fault.to_string())
        .capture(Fault::new("stored"));
    assert_eq!(converted, "stored");
}

#[test]
fn capture_reraises_existing_fault_outside_set() {
    let escaped = panic::catch_unwind(|| {
        Catch::expecting(failures![ArgumentError]).capture(Fault::new(InvalidOperationError))
    });
    assert!(escaped.unwrap_err().is::<InvalidOperationError>());
}

#[test]
fn policies_can_be_cloned_and_reused() {
    let policy = Catch::expecting(failures![ArgumentError]);
    let first = policy.clone().call(|| 1);
    let second = policy.call(|| -> i32 { raise(ArgumentError::new("second")) });
    assert!(first.is_success());
    assert!(second.is_failure());
}
