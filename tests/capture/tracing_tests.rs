//! Tests for the events emitted under the `tracing` feature.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use error_or_value::prelude::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

use crate::common::{ArgumentError, InvalidCastError, InvalidOperationError};

#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    target: String,
    kind: Option<String>,
}

#[derive(Default)]
struct KindVisitor {
    kind: Option<String>,
}

impl Visit for KindVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "kind" {
            self.kind = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "kind" {
            self.kind = Some(format!("{:?}", value));
        }
    }
}

/// Keeps every event it sees; spans are ignored.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn crate_events(&self) -> Vec<Recorded> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.target == "error_or_value")
            .cloned()
            .collect()
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = KindVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        self.events.lock().unwrap().push(Recorded {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            kind: visitor.kind,
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn record<R>(f: impl FnOnce() -> R) -> (R, Vec<Recorded>) {
    let recorder = Recorder::default();
    let result = tracing::subscriber::with_default(recorder.clone(), f);
    (result, recorder.crate_events())
}

#[test]
fn capture_emits_debug_event_with_kind() {
    let (outcome, events) = record(|| try_call(|| -> u8 { raise(ArgumentError::new("x")) }));

    assert!(outcome.is_failure());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert!(events[0].kind.as_deref().is_some_and(|kind| kind.ends_with("ArgumentError")));
}

#[test]
fn success_emits_nothing() {
    let (outcome, events) = record(|| try_call(|| 1_u8));

    assert!(outcome.is_success());
    assert!(events.is_empty());
}

#[test]
fn reraise_emits_warn_event() {
    let (escaped, events) = record(|| {
        panic::catch_unwind(|| {
            try_call_expecting(|| -> u8 { raise(ArgumentError::new("x")) }, failures![InvalidOperationError])
        })
    });

    assert!(escaped.unwrap_err().is::<ArgumentError>());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
}

#[test]
fn kind_mismatch_emits_error_event() {
    let (escaped, events) = record(|| {
        panic::catch_unwind(AssertUnwindSafe(|| {
            try_call_as::<InvalidCastError, u8, _>(|| raise(ArgumentError::new("x")))
        }))
    });

    assert!(escaped.unwrap_err().is::<error_or_value::KindMismatch>());
    let levels: Vec<Level> = events.iter().map(|event| event.level).collect();
    assert_eq!(levels, vec![Level::DEBUG, Level::ERROR]);
}
