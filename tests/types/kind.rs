use std::panic;

use error_or_value::{failures, ExpectedFailures, FailureKind, Fault, KindMismatch};

use crate::common::{ArgumentError, InvalidCastError, InvalidOperationError};

#[test]
fn empty_set_admits_everything() {
    let expected = ExpectedFailures::any();
    assert!(expected.is_empty());
    assert!(expected.admits(&Fault::new(ArgumentError::new("x"))));
    assert!(expected.admits(&Fault::from_panic(Box::new("plain panic"))));
}

#[test]
fn declared_set_admits_members_only() {
    let expected = failures![ArgumentError, InvalidOperationError];
    assert_eq!(expected.len(), 2);
    assert!(expected.admits(&Fault::new(ArgumentError::new("x"))));
    assert!(expected.admits(&Fault::new(InvalidOperationError)));
    assert!(!expected.admits(&Fault::new(InvalidCastError("x".into()))));
}

#[test]
fn filtering_matches_raised_payloads() {
    let payload = panic::catch_unwind(|| error_or_value::raise(InvalidOperationError)).unwrap_err();
    let fault = Fault::from_panic(payload);
    assert!(failures![InvalidOperationError].admits(&fault));
    assert!(FailureKind::of::<InvalidOperationError>().matches(&fault));
}

#[test]
fn panic_macro_payloads_are_string_kinds() {
    let literal = Fault::from_panic(panic::catch_unwind(|| panic!("literal")).unwrap_err());
    let formatted = Fault::from_panic(panic::catch_unwind(|| panic!("{}", 1)).unwrap_err());

    assert!(failures![&'static str].admits(&literal));
    assert!(failures![String].admits(&formatted));
    assert!(!failures![String].admits(&literal));
}

#[test]
fn set_ignores_order_and_duplicates() {
    let a = failures![ArgumentError, InvalidOperationError, ArgumentError];
    let b: ExpectedFailures = [
        FailureKind::of::<InvalidOperationError>(),
        FailureKind::of::<ArgumentError>(),
    ]
    .into_iter()
    .collect();

    assert_eq!(a.len(), 2);
    assert_eq!(a, b);
}

#[test]
fn insert_reports_novelty() {
    let mut expected = ExpectedFailures::new();
    assert!(expected.insert(FailureKind::of::<ArgumentError>()));
    assert!(!expected.insert(FailureKind::of::<ArgumentError>()));
    assert!(expected.contains_kind(FailureKind::of::<ArgumentError>()));
    assert_eq!(expected.iter().count(), 1);
}

#[test]
fn kind_mismatch_describes_both_sides() {
    let mismatch = KindMismatch::new("my::Target", Fault::new(String::from("boom")));
    let text = mismatch.to_string();
    assert!(text.contains("boom"));
    assert!(text.contains("my::Target"));
    assert_eq!(mismatch.expected(), "my::Target");
    assert!(std::error::Error::source(&mismatch).is_some());
    assert_eq!(mismatch.into_fault().message(), Some("boom"));
}
