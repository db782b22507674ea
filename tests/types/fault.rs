use std::any::{type_name, TypeId};
use std::error::Error;
use std::panic;

use error_or_value::{raise, try_call, Fault};

use crate::common::{ArgumentError, InvalidOperationError};

#[test]
fn new_fault_reports_kind() {
    let fault = Fault::new(ArgumentError::new("name"));
    assert!(fault.is::<ArgumentError>());
    assert!(!fault.is::<InvalidOperationError>());
    assert_eq!(fault.kind_id(), TypeId::of::<ArgumentError>());
    assert!(fault.kind_name().unwrap().ends_with("ArgumentError"));
}

#[test]
fn downcast_returns_payload_or_fault() {
    let fault = Fault::new(ArgumentError::new("name"));
    let fault = fault.downcast::<InvalidOperationError>().unwrap_err();
    assert_eq!(fault.downcast_ref::<ArgumentError>(), Some(&ArgumentError::new("name")));
    assert_eq!(fault.downcast::<ArgumentError>().unwrap(), ArgumentError::new("name"));
}

#[test]
fn message_from_panic_macro() {
    let payload = panic::catch_unwind(|| panic!("code {}", 7)).unwrap_err();
    let fault = Fault::from_panic(payload);
    assert_eq!(fault.message(), Some("code 7"));
    assert_eq!(fault.to_string(), "code 7");
}

#[test]
fn message_absent_for_typed_kinds() {
    let payload = panic::catch_unwind(|| raise(InvalidOperationError)).unwrap_err();
    let fault = Fault::from(payload);
    assert!(fault.is::<InvalidOperationError>());
    assert_eq!(fault.message(), None);
    assert!(fault.kind_name().unwrap().ends_with("InvalidOperationError"));
}

#[test]
fn raised_kind_name_reaches_display() {
    let fault = try_call(|| -> u8 { raise(ArgumentError::new("name")) }).into_error().unwrap();
    assert_eq!(fault.kind_name(), Some(type_name::<ArgumentError>()));
    assert_eq!(fault.to_string(), format!("failure of kind `{}`", type_name::<ArgumentError>()));
}

#[test]
fn resumed_fault_keeps_kind_name() {
    let inner = try_call(|| -> u8 { raise(InvalidOperationError) }).into_error().unwrap();
    let outer = try_call(|| -> u8 { inner.resume() }).into_error().unwrap();
    assert_eq!(outer.kind_name(), Some(type_name::<InvalidOperationError>()));
}

#[test]
fn foreign_payload_has_no_name() {
    let payload = panic::catch_unwind(|| panic::panic_any(9_u32)).unwrap_err();
    assert_eq!(Fault::from_panic(payload).kind_name(), None);
}

#[test]
fn fault_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Fault>();
}

#[test]
fn fault_propagates_into_boxed_error() {
    fn load() -> Result<u8, Box<dyn Error + Send + Sync>> {
        let value = try_call(|| -> u8 { raise(ArgumentError::new("config")) }).into_result()?;
        Ok(value)
    }

    let err = load().unwrap_err();
    let fault = err.downcast::<Fault>().unwrap();
    assert_eq!(fault.downcast_ref::<ArgumentError>(), Some(&ArgumentError::new("config")));
}

#[test]
fn display_uses_kind_name_when_known() {
    let fault = Fault::new(InvalidOperationError);
    assert!(fault.to_string().starts_with("failure of kind `"));
    assert!(format!("{:?}", fault).contains("InvalidOperationError"));
}

#[test]
fn resume_reraises_original_payload() {
    let fault = Fault::new(ArgumentError::new("again"));
    let payload = panic::catch_unwind(panic::AssertUnwindSafe(|| fault.resume())).unwrap_err();
    assert_eq!(payload.downcast_ref::<ArgumentError>(), Some(&ArgumentError::new("again")));
}

#[test]
fn into_payload_keeps_kind() {
    let payload = Fault::new(3_u8).into_payload();
    assert_eq!(payload.downcast_ref::<u8>(), Some(&3));
}
